use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use menu_tui::app::App;
use menu_tui::cli::{CliArgs, SeedItem};
use menu_tui::config::init_app_config;
use menu_tui::logging::init_logging;
use menu_tui::{event, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Setup error handling
    terminal::install_panic_hook()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config();
    init_logging(&config)?;

    // Initialize application state
    let mut app = App::new();
    seed_store(&mut app, &args.items)?;

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

/// Adds the `--item` values through the normal form validation.
fn seed_store(app: &mut App, seeds: &[SeedItem]) -> Result<()> {
    for seed in seeds {
        app.store
            .add_item(&seed.name, &seed.price, &seed.category)
            .map_err(|e| eyre!("Invalid --item '{}': {e}", seed.name))?;
    }
    if !seeds.is_empty() {
        info!(count = seeds.len(), "menu seeded from command line");
    }
    Ok(())
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
