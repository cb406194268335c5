use anyhow::Context;
use catalog::{CatalogConfig, GameCatalog};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = CatalogConfig::load().context("Failed to load configuration")?;
    let catalog = GameCatalog::from_config(&config).context("Failed to build game catalog")?;

    let games = catalog.get_games();
    info!("Catalog holds {} games", games.len());

    let fixture = serde_json::json!({
        "genres": catalog.genres().get_genres(),
        "games": games,
    });
    let output = if config.pretty_json {
        serde_json::to_string_pretty(&fixture)?
    } else {
        serde_json::to_string(&fixture)?
    };
    println!("{}", output);

    Ok(())
}
