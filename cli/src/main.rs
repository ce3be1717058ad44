use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod display;
mod logging;

#[derive(Parser)]
#[command(
    name = "loopkiosk",
    version,
    about = "Looping-video kiosk with persistent turn and boop counters"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream the video in, wait for a click, then run the playback loop
    Play {
        /// URL or local path of the video asset (overrides config)
        #[arg(short, long)]
        source: Option<String>,

        /// Length of one playback loop in seconds (overrides config)
        #[arg(long)]
        loop_secs: Option<f64>,

        /// Counter data directory (overrides config)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Run one loop cycle on the simulated clock and print the totals
    Simulate,
    /// Print the stored counter values
    Stats {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Reset both stored counters to zero
    Reset {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            source,
            loop_secs,
            data_dir,
        } => {
            let mut config = loopkiosk_core::load_config().map_err(|e| e.to_string())?;
            if let Some(source) = source {
                config.video_source = source;
            }
            if let Some(loop_secs) = loop_secs {
                config.loop_secs = loop_secs;
            }
            if let Some(data_dir) = data_dir {
                config.data_dir = Some(data_dir);
            }
            commands::play(config).await
        }
        Commands::Simulate => commands::simulate(),
        Commands::Stats { data_dir } => commands::stats(data_dir),
        Commands::Reset { data_dir } => commands::reset(data_dir),
    }
}
