use crate::config::AppConfig;
use crate::database::{seed, DatabaseManager};

pub async fn handle(config: AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database).await?;

    let result = seed::run(&pool, config.security.bcrypt_cost).await;
    DatabaseManager::close(&pool).await;

    let summary = result?;
    println!(
        "Seeded {} categories, {} tags, {} pets, {} users",
        summary.categories, summary.tags, summary.pets, summary.users
    );
    Ok(())
}
