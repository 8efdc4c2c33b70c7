use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vitrine::ui::terminal_guard::install_panic_hook;
use vitrine::{render_listing, util, App, Catalog, Config};

/// Browse an image catalog in the terminal: filter by category, search,
/// apply visual filters and page through a lightbox.
#[derive(Parser)]
#[command(name = "vitrine", version)]
struct Args {
    /// Catalog file (.toml or .json)
    catalog: PathBuf,

    /// Start in this category
    #[arg(long)]
    category: Option<String>,

    /// Start with this search query
    #[arg(long)]
    query: Option<String>,

    /// Start with this visual filter token (interactive view only)
    #[arg(long, conflicts_with = "list")]
    filter: Option<String>,

    /// Print the visible items and exit instead of starting the UI
    #[arg(long)]
    list: bool,

    /// Config file to use instead of <data dir>/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Data directory for config and logs (default ~/.vitrine)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn configure_logging() -> Result<()> {
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    util::init_data_dir(args.data_dir.clone());
    configure_logging()?;

    let catalog = Catalog::load(&args.catalog)?;

    if args.list {
        let listing = render_listing(catalog, args.category.as_deref(), args.query.as_deref())?;
        print!("{}", listing);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let mut app = App::new(catalog, config);
    app.apply_initial(
        args.category.as_deref(),
        args.query.as_deref(),
        args.filter.as_deref(),
    )
    .context("Invalid starting view")?;

    install_panic_hook();
    tracing::info!(catalog = %args.catalog.display(), "Starting gallery");
    app.run().await
}
