use mvapp::{WebAppExt, Webapp};
use mvconfig::get_config;
use mvpresets::{PresetsConfigExt, PresetsExt};
use mvserver::{LoggingOptions, ServerBuilder};
use mvutils::SystemResolver;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config();
    let mut server = ServerBuilder::new_configured().build();

    // Le logging doit être en place avant toute autre initialisation
    server
        .init_logging(LoggingOptions::from_config(&config))
        .await;

    info!("📂 Opening preset store...");
    let store = config.presets_store()?;
    info!("✅ Presets stored in {}", store.directory().display());
    server.init_presets_api(store).await;

    info!("🖥️ Registering system info API...");
    server.init_system_info(SystemResolver).await;

    info!("📡 Registering Web application...");
    server.add_webapp::<Webapp>("/").await;

    info!("🌐 Starting HTTP server...");
    server.start().await?;

    info!("✅ MultiView is ready!");
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
