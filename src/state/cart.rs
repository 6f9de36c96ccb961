//! Shopping cart of pending bookings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<CartState>` context. Detail pages add items, the cart
//! page removes and clears them, and the nav bar shows `cart_count`.
//!
//! DESIGN
//! ======
//! `add`, `remove`, and `clear` are pure transitions over the item list. The
//! `*_item`/`clear_cart` wrappers apply a transition and then write the full
//! list through the storage port, one write per mutation.
//!
//! A line is identified by `(id, type)`. The same hotel booked twice merges
//! into one line; a hotel and a car that share a backend id stay separate.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::config::CART_STORAGE_KEY;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const DEFAULT_ITEM_TYPE: &str = "generic";

pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One bookable unit held in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    #[serde(rename = "type", default = "default_item_type")]
    pub item_type: String,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Unvalidated add-to-cart input.
///
/// `quantity` is whatever the caller had on hand (form value, JSON) so that
/// non-numeric input can be normalized rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CartItemDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<serde_json::Value>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CartItemDraft {
    pub fn new(id: impl Into<String>, item_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: Some(id.into()), item_type: Some(item_type.into()), name: Some(name.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<serde_json::Value>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64, currency: Option<String>) -> Self {
        self.price = Some(price);
        self.currency = currency;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_owned(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cannot add an empty item to the cart")]
    MissingItem,
    #[error("cannot add an item without an id to the cart")]
    MissingId,
}

/// Per-currency total for priced lines.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyTotal {
    pub currency: Option<String>,
    pub amount: f64,
}

/// Ordered cart lines, unique by `(id, type)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

fn default_item_type() -> String {
    DEFAULT_ITEM_TYPE.to_owned()
}

/// Coerce any quantity input to a positive whole number.
///
/// Missing, non-numeric, non-finite, and non-positive values become 1;
/// everything else is floored, never below 1.
pub fn normalize_quantity(raw: Option<&serde_json::Value>) -> u32 {
    let number = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() && n >= 1.0 => floor_to_u32(n),
        _ => 1,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_to_u32(n: f64) -> u32 {
    n.floor().min(f64::from(u32::MAX)) as u32
}

impl CartState {
    /// Load the persisted cart.
    ///
    /// A blob that is not a JSON array reads as an empty cart. Inside the
    /// array each line is decoded on its own and re-added, so one unreadable
    /// line is skipped without losing the rest, and odd quantities normalize.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let lines: Vec<serde_json::Value> = load_json(store, CART_STORAGE_KEY).unwrap_or_default();
        let mut state = Self::default();
        // Re-adding repairs stored duplicates and zero quantities.
        for line in lines {
            let draft = match serde_json::from_value::<CartItemDraft>(line) {
                Ok(draft) => draft,
                Err(e) => {
                    log::warn!("cart: skipping unreadable stored line: {e}");
                    continue;
                }
            };
            if let Err(e) = state.add(Some(draft)) {
                log::warn!("cart: skipping stored line: {e}");
            }
        }
        state
    }

    /// Sum of quantities across every line.
    pub fn cart_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line for `(id, item_type)`, if present.
    pub fn find(&self, id: &str, item_type: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id && item.item_type == item_type)
    }

    /// `price × quantity` summed per currency, in first-seen order.
    pub fn subtotals(&self) -> Vec<CurrencyTotal> {
        let mut totals: Vec<CurrencyTotal> = Vec::new();
        for item in &self.items {
            let Some(price) = item.price else {
                continue;
            };
            let amount = price * f64::from(item.quantity);
            match totals.iter_mut().find(|t| t.currency == item.currency) {
                Some(total) => total.amount += amount,
                None => totals.push(CurrencyTotal { currency: item.currency.clone(), amount }),
            }
        }
        totals
    }

    /// Merge-or-append transition.
    ///
    /// # Errors
    ///
    /// Rejects a missing draft or one without a non-empty id; the cart is
    /// left unchanged.
    pub fn add(&mut self, draft: Option<CartItemDraft>) -> Result<(), CartError> {
        let draft = draft.ok_or(CartError::MissingItem)?;
        let id = draft.id.filter(|id| !id.is_empty()).ok_or(CartError::MissingId)?;
        let item_type = draft.item_type.filter(|t| !t.is_empty()).unwrap_or_else(default_item_type);
        let quantity = normalize_quantity(draft.quantity.as_ref());

        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id && item.item_type == item_type) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            if draft.price.is_some() {
                existing.price = draft.price;
            }
            if draft.currency.is_some() {
                existing.currency = draft.currency;
            }
            if existing.name.is_empty() {
                existing.name = draft.name.unwrap_or_default();
            }
            existing.metadata.extend(draft.metadata);
            return Ok(());
        }

        self.items.push(CartItem {
            id,
            item_type,
            name: draft.name.unwrap_or_default(),
            quantity,
            price: draft.price,
            currency: draft.currency,
            metadata: draft.metadata,
        });
        Ok(())
    }

    /// Drop every line with `item_id`, narrowed to `item_type` when given.
    pub fn remove(&mut self, item_id: &str, item_type: Option<&str>) {
        self.items
            .retain(|item| item.id != item_id || item_type.is_some_and(|t| item.item_type != t));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Add `draft` and persist. Invalid drafts are logged and ignored.
    pub fn add_item(&mut self, store: &impl KeyValueStore, draft: Option<CartItemDraft>) {
        match self.add(draft) {
            Ok(()) => self.persist(store),
            Err(e) => log::warn!("cart: {e}"),
        }
    }

    pub fn remove_item(&mut self, store: &impl KeyValueStore, item_id: &str, item_type: Option<&str>) {
        self.remove(item_id, item_type);
        self.persist(store);
    }

    pub fn clear_cart(&mut self, store: &impl KeyValueStore) {
        self.clear();
        self.persist(store);
    }

    fn persist(&self, store: &impl KeyValueStore) {
        save_json(store, CART_STORAGE_KEY, &self.items);
    }
}
