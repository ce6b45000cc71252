use app_core::{UseCase, UseCaseValidatable};
use dotenvy::{dotenv, from_filename};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttl_cache::CacheSettings;

use crate::{app_common::AppError, infrastructure::di::CacheDemoModule};

pub mod app_common;
pub mod core;
pub mod infrastructure;


fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    let _ = from_filename(".env");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();

    load_env_for_workspace();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = CacheSettings::from_env()?;
    let module = CacheDemoModule::init_dependencies(&settings)?;

    for name in module.cache_manager.cache_names() {
        if let Some(region) = module.cache_manager.cache(&name) {
            info!(
                cache = %name,
                ttl = ?region.configuration().ttl(),
                configured = module.cache_manager.is_configured(&name),
                "Cache region ready"
            );
        }
    }

    for _ in 0..2 {
        let user = module.find_user_use_case.validate_and_execute(1).await?;
        info!(?user, "find_user");
    }

    if let Err(e) = module.find_user_use_case.validate_and_execute(0).await {
        warn!(error = %e, "find_user rejected");
    }

    for _ in 0..2 {
        let out = module.list_orders_use_case.execute(1).await?;
        info!(count = out.count, orders = ?out.orders, "list_orders");
    }

    for _ in 0..2 {
        let product = module
            .find_product_use_case
            .validate_and_execute("SKU-1".to_string())
            .await?;
        info!(?product, "find_product");
    }

    info!(
        loads = module.repository.loads(),
        "Catalog loads after warm cache calls"
    );

    Ok(())
}
