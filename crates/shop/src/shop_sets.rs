//! Ordering of shop systems within `Update`.
//!
//! ```text
//! Input  →  View
//! ```
//!
//! * **Input** – Event handlers that mutate shop state (cart, workflow,
//!   panel, filter). They run chained, one after another, so every handler
//!   sees the state left by the previous one.
//! * **View** – Rebuilds derived display state from the mutated resources.
//!
//! Persistence runs after `Input` so the stored cart is rewritten in the
//! same frame as the mutation.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShopSet {
    Input,
    View,
}
