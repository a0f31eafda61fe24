use anyhow::Result;
use mockly::ui::MocklyApp;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mockly=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("[APP] Starting Mockly");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Mockly"),
        ..Default::default()
    };

    eframe::run_native(
        "Mockly",
        options,
        Box::new(|cc| Ok(Box::new(MocklyApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run Mockly: {err}"))
}
