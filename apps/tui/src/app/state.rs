use crate::app::screen::{Navigation, Screen, ScreenTransitionError};
use crate::store::{DraftItem, MenuStore};
use tracing::{debug, warn};

/// Which control has keyboard focus on the Manage screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageFocus {
    Name,
    Price,
    Category,
    AddButton,
    ItemList,
}

impl ManageFocus {
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Price => Self::Category,
            Self::Category => Self::AddButton,
            Self::AddButton => Self::ItemList,
            Self::ItemList => Self::Name,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::ItemList,
            Self::Price => Self::Name,
            Self::Category => Self::Price,
            Self::AddButton => Self::Category,
            Self::ItemList => Self::AddButton,
        }
    }

    pub const fn is_text_field(self) -> bool {
        matches!(self, Self::Name | Self::Price | Self::Category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal acknowledgment. While one is pending no other input is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub store: MenuStore,
    pub draft: DraftItem,
    pub manage_focus: ManageFocus,
    pub selected_item_index: usize,
    pub home_scroll: usize,
    pub filter_query: String,
    pub filter_scroll: usize,
    pub notice: Option<Notice>,
    pub show_help: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub const fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Home,
            store: MenuStore::new(),
            draft: DraftItem::new(),
            manage_focus: ManageFocus::Name,
            selected_item_index: 0,
            home_scroll: 0,
            filter_query: String::new(),
            filter_scroll: 0,
            notice: None,
            show_help: false,
        }
    }

    /// Moves to another screen through the transition table.
    ///
    /// A rejected transition leaves the current screen untouched.
    pub fn navigate(&mut self, navigation: Navigation) -> Result<(), ScreenTransitionError> {
        let next = self
            .screen
            .next(navigation)
            .inspect_err(|e| warn!(%e, "navigation rejected"))?;
        debug!(from = %self.screen, to = %next, "screen change");

        if next == Screen::Manage {
            self.manage_focus = ManageFocus::Name;
            self.clamp_selection();
        }
        self.screen = next;
        Ok(())
    }

    /// The draft buffer behind the focused Manage field, if the focus is on one.
    pub fn focused_draft_mut(&mut self) -> Option<&mut String> {
        match self.manage_focus {
            ManageFocus::Name => Some(&mut self.draft.name),
            ManageFocus::Price => Some(&mut self.draft.price),
            ManageFocus::Category => Some(&mut self.draft.category),
            ManageFocus::AddButton | ManageFocus::ItemList => None,
        }
    }

    /// Lines in the Home menu: a header per populated category, its items,
    /// and one blank line between categories.
    pub fn home_line_count(&self) -> usize {
        let blocks = self.store.summary().categories;
        let rows: usize = blocks.iter().map(|block| block.items.len() + 1).sum();
        rows + blocks.len().saturating_sub(1)
    }

    pub fn filter_line_count(&self) -> usize {
        self.store.items_by_category(&self.filter_query).len()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Keeps the Manage list selection inside the current collection.
    pub fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected_item_index = 0;
        } else if self.selected_item_index >= len {
            self.selected_item_index = len - 1;
        }
    }
}
