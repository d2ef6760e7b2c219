//! Drink customization workflow.
//!
//! Picking a drink from the menu starts the workflow (`Idle` → `Selecting`)
//! and opens the dialog. Submitting the dialog composes a [`LineItem`] from
//! the selection and the form; submitting or cancelling both return the
//! workflow to `Idle`, reset the form and drop the selection.

use std::fmt;

use bevy::prelude::*;

use crate::config::{DEFAULT_MILK, DEFAULT_SIZE, DEFAULT_SWEETNESS, TOPPING_SURCHARGE};
use crate::field_parse::{parse_decimal, parse_quantity};
use crate::line_item::LineItem;

// =============================================================================
// Selection
// =============================================================================

/// The drink currently being customized.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub drink: String,
    pub base_price: f64,
}

/// Why a drink could not be selected.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The add control carried no drink name.
    MissingName,
    /// The price was missing, non-numeric or negative.
    InvalidPrice(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::MissingName => write!(f, "Invalid drink or price: missing drink name"),
            SelectionError::InvalidPrice(raw) => {
                write!(f, "Invalid drink or price: cannot use price {raw:?}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

impl Selection {
    /// Validates the name and price text attached to a menu item's add
    /// control.
    pub fn parse(name: Option<&str>, price: Option<&str>) -> Result<Self, SelectionError> {
        let drink = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err(SelectionError::MissingName),
        };
        let raw_price = price.unwrap_or_default();
        let base_price = parse_decimal(raw_price)
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| SelectionError::InvalidPrice(raw_price.to_string()))?;
        Ok(Self { drink, base_price })
    }
}

// =============================================================================
// Form
// =============================================================================

/// One topping quantity field. The quantity is kept as typed text.
#[derive(Debug, Clone, PartialEq)]
pub struct ToppingField {
    pub name: String,
    pub quantity: String,
}

impl ToppingField {
    /// Parsed quantity; non-numeric text counts as zero.
    pub fn units(&self) -> i64 {
        parse_quantity(&self.quantity).unwrap_or(0)
    }
}

/// Contents of the customization dialog.
///
/// Empty choice fields fall back to their defaults when the form is
/// submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierForm {
    pub size: String,
    pub milk: String,
    pub sweetness: String,
    pub notes: String,
    pub toppings: Vec<ToppingField>,
}

impl ModifierForm {
    /// A form at its defaults with one zero-quantity field per topping.
    pub fn new<S: AsRef<str>>(toppings: &[S]) -> Self {
        Self {
            size: DEFAULT_SIZE.to_string(),
            milk: DEFAULT_MILK.to_string(),
            sweetness: DEFAULT_SWEETNESS.to_string(),
            notes: String::new(),
            toppings: toppings
                .iter()
                .map(|name| ToppingField {
                    name: name.as_ref().to_string(),
                    quantity: "0".to_string(),
                })
                .collect(),
        }
    }

    /// Restores every field to its default, keeping the topping list.
    pub fn reset(&mut self) {
        let names: Vec<String> = self.toppings.iter().map(|t| t.name.clone()).collect();
        *self = Self::new(names.as_slice());
    }

    /// Sets the quantity text of the named topping, if the form has it.
    pub fn set_topping(&mut self, name: &str, quantity: impl Into<String>) {
        if let Some(field) = self.toppings.iter_mut().find(|t| t.name == name) {
            field.quantity = quantity.into();
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Builds the cart line for `selection` customized by `form`.
///
/// Name: `"<drink> (<size>, <milk>, <sweetness>)"`, then
/// `" + <name> xN, ..."` for toppings with a positive quantity, then
/// `" | Note: <notes>"` when notes are present. Each topping unit adds
/// [`TOPPING_SURCHARGE`] to the base price.
pub fn compose_line_item(selection: &Selection, form: &ModifierForm) -> LineItem {
    let size = or_default(&form.size, DEFAULT_SIZE);
    let milk = or_default(&form.milk, DEFAULT_MILK);
    let sweetness = or_default(&form.sweetness, DEFAULT_SWEETNESS);

    let toppings: Vec<(&str, i64)> = form
        .toppings
        .iter()
        .map(|t| (t.name.as_str(), t.units()))
        .filter(|(_, units)| *units > 0)
        .collect();

    let topping_text = if toppings.is_empty() {
        String::new()
    } else {
        let parts: Vec<String> = toppings
            .iter()
            .map(|(name, units)| format!("{name} x{units}"))
            .collect();
        format!(" + {}", parts.join(", "))
    };

    let note_text = if form.notes.is_empty() {
        String::new()
    } else {
        format!(" | Note: {}", form.notes)
    };

    let extra: f64 = toppings
        .iter()
        .map(|(_, units)| *units as f64 * TOPPING_SURCHARGE)
        .sum();

    LineItem {
        name: format!(
            "{} ({size}, {milk}, {sweetness}){topping_text}{note_text}",
            selection.drink
        ),
        price: selection.base_price + extra,
    }
}

// =============================================================================
// Workflow resource
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Workflow {
    #[default]
    Idle,
    Selecting(Selection),
}

/// Customization workflow state plus the dialog's form.
#[derive(Resource, Debug, Clone)]
pub struct Customization {
    workflow: Workflow,
    pub form: ModifierForm,
}

impl Customization {
    pub fn new(form: ModifierForm) -> Self {
        Self {
            workflow: Workflow::Idle,
            form,
        }
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.workflow {
            Workflow::Idle => None,
            Workflow::Selecting(selection) => Some(selection),
        }
    }

    /// Whether the dialog is open.
    pub fn is_selecting(&self) -> bool {
        matches!(self.workflow, Workflow::Selecting(_))
    }

    /// Dialog heading, e.g. `"Customize: Milk Tea"`.
    pub fn title(&self) -> Option<String> {
        self.selection()
            .map(|selection| format!("Customize: {}", selection.drink))
    }

    /// Records a new selection, replacing any pending one.
    pub fn start(&mut self, selection: Selection) {
        self.workflow = Workflow::Selecting(selection);
    }

    /// Composes the line item and returns to `Idle`. `None` when no drink
    /// was selected.
    pub fn submit(&mut self) -> Option<LineItem> {
        let Workflow::Selecting(selection) = std::mem::take(&mut self.workflow) else {
            return None;
        };
        let item = compose_line_item(&selection, &self.form);
        self.form.reset();
        Some(item)
    }

    /// Closes the dialog without adding anything.
    pub fn cancel(&mut self) {
        self.workflow = Workflow::Idle;
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(drink: &str, price: f64) -> Selection {
        Selection {
            drink: drink.to_string(),
            base_price: price,
        }
    }

    fn form() -> ModifierForm {
        ModifierForm::new(&["Pearl", "Jelly", "Boba"])
    }

    #[test]
    fn test_parse_selection() {
        let s = Selection::parse(Some("Milk Tea"), Some("2.50")).unwrap();
        assert_eq!(s, selection("Milk Tea", 2.5));
    }

    #[test]
    fn test_parse_selection_zero_price_is_valid() {
        assert!(Selection::parse(Some("Water"), Some("0")).is_ok());
    }

    #[test]
    fn test_parse_selection_rejects_missing_name() {
        assert_eq!(
            Selection::parse(None, Some("2.50")),
            Err(SelectionError::MissingName)
        );
        assert_eq!(
            Selection::parse(Some(""), Some("2.50")),
            Err(SelectionError::MissingName)
        );
    }

    #[test]
    fn test_parse_selection_rejects_bad_price() {
        for raw in [None, Some(""), Some("abc"), Some("-1")] {
            let err = Selection::parse(Some("Milk Tea"), raw).unwrap_err();
            assert!(matches!(err, SelectionError::InvalidPrice(_)), "{raw:?}");
        }
    }

    #[test]
    fn test_selection_error_display() {
        let msg = SelectionError::InvalidPrice("abc".into()).to_string();
        assert!(msg.contains("Invalid drink or price"), "got: {msg}");
        assert!(msg.contains("abc"), "got: {msg}");
    }

    #[test]
    fn test_compose_defaults_only() {
        let item = compose_line_item(&selection("Green Tea", 3.0), &form());
        assert_eq!(item.name, "Green Tea (Regular, Whole, 100%)");
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn test_compose_empty_choices_fall_back_to_defaults() {
        let mut f = form();
        f.size.clear();
        f.milk.clear();
        f.sweetness.clear();
        let item = compose_line_item(&selection("Green Tea", 3.0), &f);
        assert_eq!(item.name, "Green Tea (Regular, Whole, 100%)");
    }

    #[test]
    fn test_compose_toppings_surcharge() {
        let mut f = form();
        f.set_topping("Pearl", "2");
        f.set_topping("Jelly", "1");
        let item = compose_line_item(&selection("Milk Tea", 3.0), &f);
        assert!(item.name.contains("+ Pearl x2, Jelly x1"), "got: {}", item.name);
        assert_eq!(item.price, 4.5);
    }

    #[test]
    fn test_compose_counts_oversized_quantity() {
        let mut f = form();
        f.set_topping("Pearl", "99999999999999999999");
        let item = compose_line_item(&selection("Milk Tea", 2.5), &f);
        assert!(item.name.contains("+ Pearl x"), "got: {}", item.name);
        assert!(item.price > 2.5);
    }

    #[test]
    fn test_compose_skips_zero_negative_and_malformed_quantities() {
        let mut f = form();
        f.set_topping("Pearl", "0");
        f.set_topping("Jelly", "-2");
        f.set_topping("Boba", "lots");
        let item = compose_line_item(&selection("Milk Tea", 3.0), &f);
        assert_eq!(item.name, "Milk Tea (Regular, Whole, 100%)");
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn test_compose_note_appended_last() {
        let mut f = form();
        f.set_topping("Boba", "3");
        f.notes = "less ice".to_string();
        f.size = "Large".to_string();
        f.milk = "Oat".to_string();
        f.sweetness = "50%".to_string();
        let item = compose_line_item(&selection("Milk Tea", 2.5), &f);
        assert_eq!(
            item.name,
            "Milk Tea (Large, Oat, 50%) + Boba x3 | Note: less ice"
        );
        assert_eq!(item.price, 4.0);
    }

    #[test]
    fn test_submit_resets_form_and_returns_idle() {
        let mut c = Customization::new(form());
        c.start(selection("Milk Tea", 3.0));
        c.form.set_topping("Pearl", "1");
        c.form.notes = "hot".to_string();

        let item = c.submit().expect("selection was pending");
        assert_eq!(item.price, 3.5);
        assert!(!c.is_selecting());
        assert_eq!(c.form, form());
    }

    #[test]
    fn test_submit_without_selection_adds_nothing() {
        let mut c = Customization::new(form());
        assert!(c.submit().is_none());
    }

    #[test]
    fn test_cancel_clears_selection() {
        let mut c = Customization::new(form());
        c.start(selection("Milk Tea", 3.0));
        c.form.milk = "Oat".to_string();
        c.cancel();
        assert!(c.selection().is_none());
        assert_eq!(c.form.milk, DEFAULT_MILK);
        assert!(c.submit().is_none());
    }

    #[test]
    fn test_start_overwrites_pending_selection() {
        let mut c = Customization::new(form());
        c.start(selection("Milk Tea", 3.0));
        c.start(selection("Taro", 3.5));
        assert_eq!(c.title().as_deref(), Some("Customize: Taro"));
    }
}
