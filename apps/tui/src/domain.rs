/// Currency prefix shown in front of every price.
pub const CURRENCY: &str = "R";

/// The fixed categories listed on the home screen, in display order.
///
/// Stored item categories are free text; these four are only the ones the
/// home screen groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starter,
    Main,
    Drink,
    Dessert,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Starter, Self::Main, Self::Drink, Self::Dessert];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Main => "main",
            Self::Drink => "drink",
            Self::Dessert => "dessert",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Main => "Main",
            Self::Drink => "Drink",
            Self::Dessert => "Dessert",
        }
    }
}

/// Formats a price with the currency prefix and two decimals, e.g. `R25.50`.
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY}{price:.2}")
}
