use std::fmt;
use thiserror::Error;

/// Top-level view currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Manage,
    Filter,
}

/// Explicit navigation requests coming from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    ToManage,
    ToFilter,
    ToHome,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Manage => write!(f, "Manage"),
            Self::Filter => write!(f, "Filter"),
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToManage => write!(f, "ToManage"),
            Self::ToFilter => write!(f, "ToFilter"),
            Self::ToHome => write!(f, "ToHome"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid transition from {from} with {navigation}")]
pub struct ScreenTransitionError {
    pub from: Screen,
    pub navigation: Navigation,
}

/// Every allowed `(from, navigation) -> to` edge.
const TRANSITIONS: [(Screen, Navigation, Screen); 4] = [
    (Screen::Home, Navigation::ToManage, Screen::Manage),
    (Screen::Home, Navigation::ToFilter, Screen::Filter),
    (Screen::Manage, Navigation::ToHome, Screen::Home),
    (Screen::Filter, Navigation::ToHome, Screen::Home),
];

impl Screen {
    pub fn next(self, navigation: Navigation) -> Result<Self, ScreenTransitionError> {
        TRANSITIONS
            .iter()
            .find(|(from, nav, _)| *from == self && *nav == navigation)
            .map(|(_, _, to)| *to)
            .ok_or(ScreenTransitionError {
                from: self,
                navigation,
            })
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Chef Christoffel's Menu",
            Self::Manage => "Manage Menu",
            Self::Filter => "Filter Menu by Category",
        }
    }
}
