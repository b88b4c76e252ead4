mod app;

use anyhow::Result;
use strip_engine::device::GpuInit;
use strip_engine::logging::{init_logging, LoggingConfig};
use strip_engine::scene::StripConfig;
use strip_engine::window::{Runtime, RuntimeConfig};

use app::StripApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut app = StripApp::new(StripConfig::default());
    if let Some(seed) = std::env::var("STRIP_SEED").ok().and_then(|s| s.parse().ok()) {
        log::info!("using point seed {seed}");
        app = app.with_seed(seed);
    }

    let config = RuntimeConfig {
        title: "Hello Strip".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), app)
}
