use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use folio::{app::render::RenderContext, catalog::Catalog, config::Config, export, logging};

/// Write the portfolio as static files for any static host.
#[derive(Parser)]
#[command(name = "folio-export")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,

    /// Deployment base path, e.g. `/my-site/` (defaults to FOLIO_BASE_URL)
    #[arg(long)]
    base: Option<String>,

    /// Public origin for canonical links and the sitemap (defaults to FOLIO_SITE_URL)
    #[arg(long)]
    site: Option<String>,

    /// Media directory copied into the output (defaults to FOLIO_PUBLIC_DIR)
    #[arg(long)]
    public: Option<PathBuf>,

    /// Skip copying media
    #[arg(long)]
    no_public: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli()?;

    let mut config = Config::from_env();
    if let Some(base) = cli.base.as_deref() {
        config = config.with_base_url(base);
    }
    if let Some(site) = cli.site.as_deref() {
        config = config.with_site_url(site);
    }
    if let Some(public) = cli.public {
        config.public_dir = public;
    }

    let catalog = Arc::new(Catalog::builtin().context("invalid project catalog")?);
    let ctx = RenderContext::from_config(&config);
    let public = (!cli.no_public).then_some(config.public_dir.as_path());
    let report = export::export_site(&catalog, &ctx, &cli.out, public)?;

    println!(
        "folio-export: {} pages, {} media files under {}",
        report.pages.len(),
        report.public_files,
        cli.out.display()
    );
    Ok(())
}
