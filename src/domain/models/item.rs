//! To-do item domain model.

use serde::{Deserialize, Serialize};

/// A to-do item as stored by the backing store.
///
/// The `id` is assigned by the store on creation and never changes;
/// `text` and `is_completed` are replaced wholesale by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identity.
    pub id: i64,
    /// Item text, possibly empty.
    pub text: String,
    /// Completion flag.
    pub is_completed: bool,
}

impl Item {
    /// Create an item with a known identity.
    pub fn new(id: i64, text: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            is_completed,
        }
    }

    /// Case-insensitive substring match on the item text.
    ///
    /// Items with empty text never match, not even the empty term.
    pub fn text_contains(&self, term: &str) -> bool {
        self.text_contains_folded(&fold_case(term))
    }

    /// Like [`Item::text_contains`], for a needle already passed through
    /// [`fold_case`].
    pub fn text_contains_folded(&self, needle: &str) -> bool {
        !self.text.is_empty() && fold_case(&self.text).contains(needle)
    }
}

/// Ordinal case fold: each `char` maps to its simple uppercase form.
///
/// Characters whose uppercase expands to several chars (`ß`) are kept as is,
/// and no compatibility mapping happens, so the Kelvin sign does not fold
/// onto `k`.
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// An item that has not been persisted yet and so has no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    /// Item text, possibly empty.
    pub text: String,
    /// Completion flag, false unless given.
    #[serde(default)]
    pub is_completed: bool,
}

impl NewItem {
    /// Create an incomplete item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_completed: false,
        }
    }

    /// Set the completion flag.
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Attach the identity the store assigned.
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            text: self.text,
            is_completed: self.is_completed,
        }
    }
}
