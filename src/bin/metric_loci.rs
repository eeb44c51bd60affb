//! metric-loci: trace one scene file.
//!
//! Run: `metric-loci scene.yaml --output figure.svg`

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use metric_loci::cancel::{CancelHook, Deadline, Never};
use metric_loci::figure::Figure;
use metric_loci::output::{csv, SvgRenderer, TerminalRenderer};
use metric_loci::scene::Scene;
use metric_loci::Error;

/// Trace loci and distance fields under non-Euclidean metrics
#[derive(Parser, Debug)]
#[command(name = "metric-loci")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Trace loci and distance fields under arbitrary metrics", long_about = None)]
struct Cli {
    /// Scene file (YAML)
    scene: PathBuf,

    /// Write the figure as SVG to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print traced points (or the distance field) as CSV on stdout
    #[arg(long)]
    csv: bool,

    /// Give up on a locus trace after this many seconds
    #[arg(long)]
    timeout: Option<f64>,

    /// Terminal preview width in characters
    #[arg(long, default_value = "80")]
    width: usize,

    /// Terminal preview height in lines
    #[arg(long, default_value = "40")]
    height: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> metric_loci::Result<()> {
    let scene = Scene::load(&cli.scene)?;
    info!("loaded {} ({})", cli.scene.display(), scene.display_title());

    let deadline = cli
        .timeout
        .and_then(|s| Duration::try_from_secs_f64(s).ok())
        .map(Deadline::after);
    let cancel: &dyn CancelHook = match &deadline {
        Some(deadline) => deadline,
        None => &Never,
    };

    let figure = match scene.run_with(cancel) {
        Err(Error::Cancelled { accepted }) => {
            warn!("trace timed out with {accepted} points accepted");
            return Err(Error::Cancelled { accepted });
        }
        other => other?,
    };
    if let Figure::Locus(locus) = &figure {
        if locus.points.is_empty() {
            warn!("no grid point satisfied the locus; try a larger tolerance or finer step");
        } else {
            info!("traced {} points", locus.points.len());
        }
    }

    if let Some(path) = &cli.output {
        SvgRenderer::default().write_to_file(&figure, path)?;
        info!("wrote {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.csv {
        csv::write_figure(&figure, &mut out)?;
    } else if cli.output.is_none() {
        let mut terminal = TerminalRenderer::new().width(cli.width).height(cli.height);
        let preview = figure.render_with(&mut terminal)?;
        out.write_all(preview.as_bytes())?;
    }
    Ok(())
}
