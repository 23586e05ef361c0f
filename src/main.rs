//! Wiring & DI. Entry point: load config, build adapters, run the pipeline once.
//! No business logic here; extraction and assembly live in the domain.

use chrono::Local;
use dotenv::dotenv;
use remarks_digest::adapters::esa::EsaAdapter;
use remarks_digest::adapters::hatena::HatenaAdapter;
use remarks_digest::ports::{PublishPort, SearchPort};
use remarks_digest::shared::config::AppConfig;
use remarks_digest::usecases::DigestService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found, using process environment"),
    }

    let cfg = AppConfig::load().unwrap_or_default();

    let esa_access_token = required(cfg.esa_access_token, "ESA_ACCESS_TOKEN")?;
    let esa_team = required(cfg.esa_current_team, "ESA_CURRENT_TEAM")?;
    let esa_screen_name = required(cfg.esa_screen_name, "ESA_SCREEN_NAME")?;
    let hatena_username = required(cfg.hatena_username, "HATENA_USERNAME")?;
    let hatena_blog_domain = required(cfg.hatena_blog_domain, "HATENA_BLOG_DOMAIN")?;
    let hatena_api_key = required(cfg.hatena_api_key, "HATENA_API_KEY")?;

    let search: Arc<dyn SearchPort> =
        Arc::new(EsaAdapter::new(esa_access_token, esa_team, esa_screen_name));
    let publish: Arc<dyn PublishPort> = Arc::new(HatenaAdapter::new(
        hatena_username,
        hatena_blog_domain,
        hatena_api_key,
    ));

    let service = DigestService::new(search, publish);

    let today = Local::now().date_naive();
    let receipt = service
        .run(today)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!(
        status = receipt.status,
        entry_url = ?receipt.entry_url,
        "weekly digest draft created"
    );

    Ok(())
}

/// Fail fast naming the missing environment variable.
fn required(value: Option<String>, key: &str) -> anyhow::Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => anyhow::bail!("Set {} (env or .env)", key),
    }
}
