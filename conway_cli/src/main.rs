// main.rs - Console front-end: prints the grid every tick until extinction,
// the generation limit or Ctrl-C.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use conway::patterns::{self, PatternStore};
use conway::{Simulation, SimulationConfig};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "conway_cli", version, about = "Run Conway's Game of Life in the terminal")]
struct Cli {
    /// JSON configuration file; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Milliseconds between generations (clamped to 50..=1000)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Stop after this many generations (0 = until extinction or Ctrl-C)
    #[arg(long, default_value_t = 0)]
    generations: u64,

    /// Builtin pattern placed near the centre
    #[arg(long, conflicts_with = "pattern_file")]
    pattern: Option<String>,

    /// Saved JSON pattern, loaded from the pattern directory
    #[arg(long)]
    pattern_file: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn load_config(&self) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => SimulationConfig::default(),
        };
        if let Some(rows) = self.rows { config.rows = rows; }
        if let Some(cols) = self.cols { config.cols = cols; }
        if let Some(ms) = self.interval_ms {
            config = config.with_interval(Duration::from_millis(ms));
        }
        config.debug |= self.debug;
        config.validate()?;
        Ok(config)
    }
}

/// Seeds the grid: a named pattern, a saved file, or the demo blinker + block.
fn seed(sim: &mut Simulation, cli: &Cli, config: &SimulationConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = &cli.pattern {
        let pattern = patterns::find_builtin(name).ok_or_else(|| {
            let known: Vec<_> = patterns::builtin_names().collect();
            format!("unknown pattern {name:?}, expected one of {}", known.join(", "))
        })?;
        sim.load_pattern(pattern);
    } else if let Some(file) = &cli.pattern_file {
        let store = PatternStore::open(&config.pattern_dir)?;
        let cells = store.load(file)?;
        if cells.is_empty() {
            warn!(file = %file, "pattern file is empty or missing");
        }
        sim.load_cells(cells, (0, 0));
    } else {
        // Blinker
        sim.load_cells([(4, 3), (4, 4), (4, 5)], (0, 0));
        // Block
        sim.load_cells([(7, 3), (7, 4), (8, 3), (8, 4)], (0, 0));
    }
    Ok(())
}

fn draw(sim: &Simulation, generation: u64) {
    // Clear screen and home the cursor
    print!("\x1B[2J\x1B[H");
    println!("{}", sim.grid());
    println!("generation {}  live {}", generation, sim.grid().live_count());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    conway::logging::init(&config);
    info!(mode = if config.debug { "DEBUG" } else { "RELEASE" }, rows = config.rows, cols = config.cols, "starting");

    let mut sim = match Simulation::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("failed to create simulation: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = seed(&mut sim, &cli, &config) {
        error!("failed to seed grid: {e}");
        std::process::exit(1);
    }

    let mut ticker = tokio::time::interval(config.update_interval);
    let mut advanced = 0;
    draw(&sim, advanced);
    // The first tick completes immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                println!();
                info!("simulation stopped by user");
                break;
            }
        }

        if !sim.advance_generation() {
            info!(generation = advanced, "no live cells left");
            break;
        }
        advanced += 1;
        draw(&sim, advanced);

        if cli.generations > 0 && advanced >= cli.generations {
            info!(generations = advanced, "generation limit reached");
            break;
        }
    }
}
