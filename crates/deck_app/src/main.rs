mod app;
mod config;
mod effects;

use std::path::PathBuf;

use deck_logging::deck_info;

fn main() -> anyhow::Result<()> {
    deck_logging::initialize_terminal(log::LevelFilter::Info);

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("deck.ron"));
    let config = config::load_config(&path);
    deck_info!(
        "Browsing {} (batch size {}, pool bound {})",
        config.listing_url,
        config.batch_size,
        config.max_pool_size
    );

    app::run(config)
}
