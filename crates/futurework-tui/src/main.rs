mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use futurework_core::constants::MIN_SLIDE_DURATION_MS;
use futurework_core::tracing_setup::init_tracing;
use futurework_core::{ContentLoader, CoreConfig};
use tracing::info;

use crate::runtime::run_app;
use ui::App;

#[derive(Parser, Debug)]
#[command(name = "futurework")]
#[command(about = "Alternative Futures of Software Work, in the terminal")]
struct Args {
    /// Config file (defaults to <config dir>/futurework/config.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Static host serving content/ai-signals and content/expert-insights
    #[arg(long)]
    base_url: Option<String>,

    /// Local directory laid out like the content host
    #[arg(long, conflicts_with = "base_url")]
    content_dir: Option<PathBuf>,

    #[arg(long)]
    max_signals: Option<usize>,

    #[arg(long)]
    max_insights: Option<usize>,

    /// How long each provocation stays up, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(MIN_SLIDE_DURATION_MS..))]
    slide_duration_ms: Option<u64>,

    /// Never auto-advance the carousel (also FUTUREWORK_REDUCED_MOTION=1)
    #[arg(long)]
    reduced_motion: bool,
}

impl Args {
    fn apply(&self, config: &mut CoreConfig) {
        if let Some(url) = &self.base_url {
            config.base_url = Some(url.clone());
            config.content_dir = None;
        }
        if let Some(dir) = &self.content_dir {
            config.content_dir = Some(dir.clone());
            config.base_url = None;
        }
        if let Some(max) = self.max_signals {
            config.max_signals = max;
        }
        if let Some(max) = self.max_insights {
            config.max_insights = max;
        }
        if let Some(ms) = self.slide_duration_ms {
            config.slide_duration_ms = ms;
        }
        if self.reduced_motion {
            config.reduced_motion = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = CoreConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut config);
    config.apply_env();
    info!("Starting with content source {:?}", config.content_source());

    let loader = config
        .build_source()
        .map(|source| ContentLoader::new(source).with_limits(config.max_signals, config.max_insights));

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let mut app = App::from_config(&config, Instant::now());
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app, loader).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
