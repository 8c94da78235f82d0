use clap::Parser;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(name = "menu_tui", version, about = "Restaurant menu recorder")]
pub struct CliArgs {
    /// Print the grouped menu and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the debug log file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Seed the menu before start, may be repeated
    #[arg(long = "item", value_name = "NAME:PRICE:CATEGORY")]
    pub items: Vec<SeedItem>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.log_file {
            std::env::set_var("MENU_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

/// Raw `NAME:PRICE:CATEGORY` triple from the command line.
///
/// Only the shape is checked here; the values go through the same validation
/// as the add-item form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedItem {
    pub name: String,
    pub price: String,
    pub category: String,
}

impl FromStr for SeedItem {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // split from the right so names may contain ':'
        let mut parts = value.rsplitn(3, ':');
        let category = parts.next();
        let price = parts.next();
        let name = parts.next();

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) => Ok(Self {
                name: name.to_string(),
                price: price.to_string(),
                category: category.to_string(),
            }),
            _ => Err(format!("expected NAME:PRICE:CATEGORY, got '{value}'")),
        }
    }
}
