//! MediaSense CLI
//!
//! Runs one capability scan against the configured platform, prints the
//! rendered report, and optionally exports it as timestamped JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediasense::agent::parse_user_agent;
use mediasense::platform::fixture::Fixture;
use mediasense::platform::Platform;
use mediasense::report::SystemInfo;
use mediasense::{render, scan, Result, ScanConfig};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "mediasense";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    tracing::info!("{} v{} starting", APP_NAME, VERSION);

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mediasense.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        match ScanConfig::from_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load config {}: {}. Using defaults.", config_path, e);
                ScanConfig::default()
            }
        }
    } else {
        ScanConfig::default()
    };
    tracing::info!("configuration loaded: {:?}", config);

    // Build the platform under test
    let (platform, system) = match &config.fixture {
        Some(path) => {
            let fixture = Fixture::from_file(path)?;
            let system = fixture
                .user_agent
                .as_deref()
                .map(parse_user_agent)
                .unwrap_or_else(SystemInfo::unknown);
            (fixture.into_platform(), system)
        }
        None => {
            tracing::warn!("no platform fixture configured, scanning detached platform");
            (Platform::detached(), SystemInfo::unknown())
        }
    };

    // A scan failure is terminal: no partial report is shown.
    let report = match scan::run(platform).await {
        Ok(report) => report,
        Err(err) => {
            eprintln!("scan failed: {err}");
            eprintln!("re-run to retry; set RUST_LOG=mediasense=debug for detail");
            return Err(err);
        }
    };

    println!("{}", render::render_report(&report, &system));

    if let Some(dir) = &config.export_dir {
        let path = mediasense::export::write_report(&report, &system, dir)?;
        println!("report exported to {}", path.display());
    }

    Ok(())
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mediasense=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
