// ABOUTME: Entry point for the caterd binary.
// ABOUTME: Loads env config, connects the document store, seeds the admin credential, and serves.

use std::sync::Arc;

use anyhow::Context;
use caterd_core::AdminUser;
use caterd_server::{AppState, Config, TokenService};
use caterd_store::{ContentStore, MongoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caterd=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("caterd starting up");

    let config = Config::from_env()?;

    let store = MongoStore::connect(&config.mongo_url, &config.db_name)
        .await
        .context("failed to connect to the document store")?;
    store
        .ensure_indexes()
        .await
        .context("failed to create indexes")?;

    let seed = AdminUser::new(
        config.admin_username.clone(),
        caterd_server::auth::hash_password(&config.admin_password)
            .context("failed to hash the seed admin password")?,
    );
    if store.ensure_admin(&seed).await? {
        tracing::info!(username = %seed.username, "seed admin credential created");
    }

    let state = Arc::new(AppState::new(
        Arc::new(store),
        TokenService::new(&config.jwt_secret),
    ));

    caterd_server::serve(&config, state)
        .await
        .context("server error")?;

    Ok(())
}
