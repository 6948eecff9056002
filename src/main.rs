use clap::Parser;
use std::path::{Path, PathBuf};

use safewater::pages::{self, Route};
use safewater::SiteStore;

#[derive(Parser)]
#[command(name = "safewater")]
#[command(about = "Site manager for the Safe Water Organisation nonprofit site")]
struct Cli {
    /// Path to the site storage file (created on first run)
    #[arg(value_name = "SITE_FILE", default_value = "safewater.db")]
    site_file: PathBuf,

    /// Render a single page as text and exit (home, about, projects, blog,
    /// donate, contact, admin)
    #[arg(long, value_name = "ROUTE")]
    page: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "safewater=debug"
    } else {
        "safewater=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    if let Some(page) = args.page.as_deref() {
        return render_page(&args.site_file, page);
    }

    #[cfg(feature = "gui")]
    return safewater::gui::run(args.site_file)
        .map_err(|e| anyhow::anyhow!("Failed to run the site GUI: {e}"));

    #[cfg(not(feature = "gui"))]
    return render_page(&args.site_file, "home");
}

fn render_page(site_file: &Path, page: &str) -> anyhow::Result<()> {
    let route = Route::parse(page);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let store = SiteStore::open(site_file).await?;
        print!("{}", pages::render_text(&store, route));
        Ok(())
    })
}
