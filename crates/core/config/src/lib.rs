use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../VisaConnect.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("VisaConnect.toml").exists() {
            builder = builder.add_source(File::new("VisaConnect.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    /// MongoDB connection URI, reference (in-memory) database when empty
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub app: String,
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeaturesLimits {
    /// Maximum length of a report reason
    pub report_reason: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Features {
    pub limits: FeaturesLimits,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sentry {
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub production: bool,
    pub database: Database,
    pub hosts: Hosts,
    pub features: Features,
    pub sentry: Sentry,
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

/// Install the tracing subscriber and, if a DSN is configured, Sentry.
///
/// The returned guard must be held for the lifetime of the service.
pub fn setup_logging(dsn: &str, release: &str) -> Option<sentry::ClientInitGuard> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    if dsn.is_empty() {
        None
    } else {
        Some(sentry::init((
            dsn.to_string(),
            sentry::ClientOptions {
                release: Some(release.to_string().into()),
                ..Default::default()
            },
        )))
    }
}

/// Configure logging and error reporting for a given service.
#[macro_export]
macro_rules! configure {
    ($application: ident) => {
        let config = $crate::config().await;
        let _sentry = $crate::setup_logging(
            &config.sentry.$application,
            concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION")),
        );
        ::tracing::info!(
            "Starting {} [version {}].",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
    };
}
