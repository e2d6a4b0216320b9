use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use chroma_engine::device::GpuInit;
use chroma_engine::logging::{init_logging, LoggingConfig};
use chroma_engine::window::{Runtime, RuntimeConfig};
use chroma_puzzle::{PuzzleApp, PuzzleConfig, RandomColors};

#[derive(Parser, Debug)]
#[command(about = "Color-matching grid puzzle", version)]
struct Args {
    /// Seed for the board colors; omit for a different game every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter in env_logger syntax, e.g. "chroma_puzzle=debug".
    #[arg(long)]
    log: Option<String>,

    /// Window title.
    #[arg(long, default_value = "Jogo das Cores")]
    title: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = PuzzleConfig::default();

    let colors = match args.seed {
        Some(seed) => {
            log::info!("using color seed {seed}");
            RandomColors::seeded(seed)
        }
        None => RandomColors::from_entropy(),
    };

    let runtime = RuntimeConfig {
        title: args.title,
        initial_size: LogicalSize::new(config.width as f64, config.height as f64),
        resizable: false,
    };

    Runtime::run(runtime, GpuInit::default(), PuzzleApp::new(config, colors))
}
