use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tui_snake::game::GameConfig;
use tui_snake::metrics::StatsFile;
use tui_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Grid rows
    #[arg(long, default_value = "16")]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value = "16")]
    cols: usize,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "90")]
    tick_ms: u64,

    /// File keeping the best score and games-played counters
    #[arg(long, default_value = "Stats.txt")]
    stats_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.rows, cli.cols);
    let stats_file = StatsFile::new(cli.stats_file);

    let mut human_mode = HumanMode::new(config, Duration::from_millis(cli.tick_ms), stats_file)?;
    human_mode.run().await?;

    Ok(())
}
