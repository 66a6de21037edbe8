use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use posterboard::{
    BannerSource, FontSet, LayoutConfig, LocalSource, ParleyText, banner_file_name,
    generate_banner_to,
};

#[derive(Parser, Debug)]
#[command(name = "posterboard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one banner PNG per catalog id.
    Render(RenderArgs),
    /// Print the default layout configuration as JSON.
    Config,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Catalog ids to render.
    #[arg(long = "id", required = true, num_args = 1..)]
    ids: Vec<String>,

    /// Output directory; files are named `banner_anime_<id>.png`.
    #[arg(long, default_value = "media")]
    out_dir: PathBuf,

    /// Font used for the title and year line.
    #[arg(long)]
    font_bold: PathBuf,

    /// Font used for the description and genre pills.
    #[arg(long)]
    font_light: PathBuf,

    /// Layout configuration JSON; defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read `<id>.json` metadata and images from this directory instead of the network.
    #[arg(long)]
    metadata_dir: Option<PathBuf>,

    /// Override rayon worker threads.
    #[arg(long)]
    jobs: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Config => cmd_config(),
    }
}

fn cmd_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&LayoutConfig::default())
        .context("serialize default layout config")?;
    println!("{json}");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(p) => LayoutConfig::from_path(p)?,
        None => LayoutConfig::default(),
    };
    let fonts = FontSet::from_paths(&args.font_bold, &args.font_light)?;
    let source = make_source(args.metadata_dir.as_deref())?;

    if args.jobs == Some(0) {
        anyhow::bail!("--jobs must be >= 1");
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = args.jobs {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().context("build rayon thread pool")?;

    let results: Vec<(String, Result<PathBuf, posterboard::BannerError>)> = pool.install(|| {
        args.ids
            .par_iter()
            .map_init(
                || ParleyText::new(fonts.clone()),
                |text, id| {
                    let res = banner_file_name(id).and_then(|name| {
                        let out = args.out_dir.join(name);
                        generate_banner_to(id, source.as_ref(), text, &cfg, &out).map(|_| out)
                    });
                    (id.clone(), res)
                },
            )
            .collect()
    });

    let mut failed = 0usize;
    for (id, res) in &results {
        match res {
            Ok(path) => println!("{id}: ok {}", path.display()),
            Err(e) => {
                failed += 1;
                eprintln!("{id}: failed at {}: {e}", e.stage());
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} banners failed", results.len());
    }
    Ok(())
}

fn make_source(metadata_dir: Option<&Path>) -> anyhow::Result<Box<dyn BannerSource>> {
    if let Some(dir) = metadata_dir {
        anyhow::ensure!(dir.is_dir(), "metadata dir '{}' does not exist", dir.display());
        return Ok(Box::new(LocalSource::new(dir)));
    }
    #[cfg(feature = "fetch")]
    {
        Ok(Box::new(posterboard::HttpSource::new()?))
    }
    #[cfg(not(feature = "fetch"))]
    {
        anyhow::bail!("built without the `fetch` feature; pass --metadata-dir")
    }
}
