pub mod error;
pub mod models;
pub mod queries;

pub use error::MenuError;
pub use models::{CategorySummary, DraftItem, MenuItem, MenuSummary};

use tracing::debug;

/// In-memory, insertion-ordered menu.
#[derive(Debug, Default, Clone)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Validates the raw form values and appends a new item.
    ///
    /// The name is stored exactly as typed; the category is lowercased.
    pub fn add_item(
        &mut self,
        name: &str,
        price: &str,
        category: &str,
    ) -> Result<&MenuItem, MenuError> {
        if name.trim().is_empty() || price.trim().is_empty() || category.trim().is_empty() {
            return Err(MenuError::MissingFields);
        }

        let price = parse_price(price)?;
        let item = MenuItem {
            name: name.to_string(),
            price,
            category: category.to_lowercase(),
        };
        debug!(name = %item.name, price = item.price, category = %item.category, "menu item added");

        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Same as [`Self::add_item`] but reads the values from a draft.
    pub fn add_draft(&mut self, draft: &DraftItem) -> Result<&MenuItem, MenuError> {
        self.add_item(&draft.name, &draft.price, &draft.category)
    }

    /// Removes the item at `index`, shifting later items down by one.
    pub fn remove_item(&mut self, index: usize) -> Option<MenuItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        debug!(index, name = %removed.name, "menu item removed");
        Some(removed)
    }

    pub fn items_by_category(&self, category: &str) -> Vec<&MenuItem> {
        queries::items_by_category(&self.items, category)
    }

    pub fn average_price(&self, category: &str) -> f64 {
        queries::average_price(&self.items, category)
    }

    pub fn summary(&self) -> MenuSummary {
        queries::build_summary(&self.items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Accepts finite, non-negative decimals only.
fn parse_price(raw: &str) -> Result<f64, MenuError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        // adding +0.0 turns -0.0 into 0.0
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value + 0.0),
        _ => Err(MenuError::InvalidPrice(trimmed.to_string())),
    }
}
