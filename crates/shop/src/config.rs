/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "cartItems";

/// Price added per unit of any topping.
pub const TOPPING_SURCHARGE: f64 = 0.5;

pub const DEFAULT_SIZE: &str = "Regular";
pub const DEFAULT_MILK: &str = "Whole";
pub const DEFAULT_SWEETNESS: &str = "100%";

/// Choices offered by the customization dialog, default first.
pub const SIZE_CHOICES: [&str; 2] = [DEFAULT_SIZE, "Large"];
pub const MILK_CHOICES: [&str; 4] = [DEFAULT_MILK, "Oat", "Almond", "Skim"];
pub const SWEETNESS_CHOICES: [&str; 5] = ["0%", "25%", "50%", "75%", DEFAULT_SWEETNESS];

/// Category tag that matches every menu item.
pub const ALL_CATEGORY: &str = "all";
