use crate::app::state::{App, ManageFocus, Notice};
use tracing::{debug, info, warn};

pub const ITEM_ADDED: &str = "Item added!";

impl App {
    /// Commits the draft fields to the store.
    ///
    /// On success the drafts are cleared; on failure they are kept so the user
    /// can correct them. Either way a notice is raised.
    pub fn submit_draft(&mut self) -> bool {
        match self.store.add_draft(&self.draft) {
            Ok(item) => {
                info!(name = %item.name, category = %item.category, "draft committed");
                self.draft.clear();
                self.manage_focus = ManageFocus::Name;
                self.notice = Some(Notice::info(ITEM_ADDED));
                true
            }
            Err(e) => {
                warn!(%e, "draft rejected");
                self.notice = Some(Notice::error(e.to_string()));
                false
            }
        }
    }

    /// Removes the item at `index` without asking for confirmation.
    pub fn remove_item_at(&mut self, index: usize) {
        if self.store.remove_item(index).is_none() {
            warn!(index, len = self.store.len(), "remove ignored, index out of range");
        }
        self.clamp_selection();
    }

    pub fn remove_selected_item(&mut self) {
        self.remove_item_at(self.selected_item_index);
    }

    /// The "Show Items" action. Filtering is already recomputed from the live
    /// query on every draw, so this only re-assigns the query to itself.
    pub fn show_items(&mut self) {
        let query = std::mem::take(&mut self.filter_query);
        debug!(query = %query, "show items");
        self.filter_query = query;
    }
}
