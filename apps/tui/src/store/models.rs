use serde::Serialize;

/// A committed menu entry. Position in the store is its only identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    /// Always lowercase.
    pub category: String,
}

/// Uncommitted text buffers bound to the add-item form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftItem {
    pub name: String,
    pub price: String,
    pub category: String,
}

impl DraftItem {
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
        self.category.clear();
    }
}

/// One populated home-screen category block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: crate::Category,
    pub label: String,
    pub average_price: f64,
    pub items: Vec<MenuItem>,
}

/// Grouped view of the menu over the fixed categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSummary {
    pub total_items: usize,
    pub categories: Vec<CategorySummary>,
}
