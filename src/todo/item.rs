use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an [`Item`], unique and increasing within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wrap a raw id value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw id value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single list entry.
///
/// Text is fixed at creation; completion is changed only by producing a
/// toggled copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    text: String,
    completed: bool,
}

impl Item {
    /// Build an item from raw user input.
    ///
    /// Returns `None` when the input is empty after trimming.
    pub(crate) fn from_input(id: ItemId, raw_text: &str) -> Option<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    /// The item's id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The trimmed text given at creation.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the item is marked done.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// A copy of this item with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Which items the filtered view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether `item` is visible under this filter.
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Button label for this filter.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// All filters in display order.
    pub fn all() -> &'static [Filter] {
        &[Self::All, Self::Active, Self::Completed]
    }
}
