use app_state::load_app_settings_from;
use chrono::Utc;
use clap::Parser;
use color_eyre::Result;
use common_services::database::get_db_pool;
use gallery_cli::cli::Args;
use gallery_cli::logging::LogFilter;
use gallery_cli::run::run_command;
use gallery_cli::source::{Catalog, Source};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let log_filter = LogFilter::install()?;
    color_eyre::install()?;

    let args = Args::parse();
    let settings = load_app_settings_from(&args.config)?;
    log_filter.apply_configured_level(&settings.logging.level)?;

    let config = settings.gallery.snapshot()?;
    let viewer = args.viewer.to_viewer();
    info!("Running as {} viewer", viewer.role());

    let source = match &args.fixture {
        Some(path) => Source::Fixture(Catalog::from_path(path)?),
        None => Source::Database(get_db_pool(&settings.database).await?),
    };

    let output = run_command(&args.command, &source, &viewer, &config, Utc::now()).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
