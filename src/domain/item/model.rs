//! Item domain entity

/// Upper bound on `Item::name` length (characters)
pub const MAX_NAME_LEN: usize = 200;

/// Upper bound on `Item::description` length (characters)
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique, positive identifier
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, description: Option<String>) -> Self {
        let name = name.into();
        debug_assert!(id >= 1, "item ids are positive");
        debug_assert!(!name.is_empty() && name.chars().count() <= MAX_NAME_LEN);
        debug_assert!(description
            .as_ref()
            .map_or(true, |d| d.chars().count() <= MAX_DESCRIPTION_LEN));

        Self {
            id,
            name,
            description,
        }
    }

    /// Whether `needle` occurs in the name or description, ignoring case.
    ///
    /// `needle` must already be lower-cased. An item without a description
    /// can only match on its name.
    pub fn matches(&self, needle: &str) -> bool {
        if self.name.to_lowercase().contains(needle) {
            return true;
        }
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

// ── Tests ──────────────────────────────────────────────────────
