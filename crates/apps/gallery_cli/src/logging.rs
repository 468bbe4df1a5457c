use color_eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Level used until settings are loaded.
pub const STARTUP_LEVEL: &str = "info";

/// Handle to the installed log filter.
///
/// `RUST_LOG` always wins. Without it the filter starts at [`STARTUP_LEVEL`]
/// and is swapped for the configured `logging.level` once settings are read.
pub struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogFilter {
    /// Installs the global subscriber. Output goes to stderr so stdout stays JSON.
    pub fn install() -> Result<Self> {
        let env_filter = EnvFilter::try_from_default_env().ok();
        let from_env = env_filter.is_some();
        let (filter, handle) =
            reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new(STARTUP_LEVEL)));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
        Ok(Self { handle, from_env })
    }

    pub fn apply_configured_level(&self, level: &str) -> Result<()> {
        if !self.from_env {
            self.handle.reload(EnvFilter::try_new(level)?)?;
        }
        Ok(())
    }
}
