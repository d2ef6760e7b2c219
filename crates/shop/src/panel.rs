use bevy::prelude::*;

/// Whether the cart panel is shown. Display state only, never persisted.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartPanel {
    pub shown: bool,
}

impl CartPanel {
    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    pub fn close(&mut self) {
        self.shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut panel = CartPanel::default();
        panel.toggle();
        assert!(panel.shown);
        panel.toggle();
        assert!(!panel.shown);
    }

    #[test]
    fn test_close_always_hides() {
        let mut panel = CartPanel { shown: true };
        panel.close();
        assert!(!panel.shown);
        panel.close();
        assert!(!panel.shown);
    }
}
