use thiserror::Error;

/// Reasons a draft item is refused by the store.
///
/// The `Display` text is what the user sees in the notice popup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid price.")]
    InvalidPrice(String),
}
