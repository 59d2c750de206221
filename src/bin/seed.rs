use tracing::{Level, info};

use portfolio_api::config::AppConfig;
use portfolio_api::{database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;
    let db = database::init_db(&config.database.url).await?;

    seed::seed_sample_data(&db).await?;
    info!("Database seeded");

    Ok(())
}
