use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the genre record (default: genres.csv)
    #[arg(long, global = true)]
    record: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Add listens to a genre
    ///
    /// The genre name is trimmed and title-cased ("hip-hop" becomes
    /// "Hip-Hop"). If the genre is already tracked the count is added to its
    /// total, otherwise it is created. The record is saved immediately.
    ///
    /// A count that is not an integer is rejected and nothing is saved.
    Add {
        /// Genre name
        genre: String,
        /// Number of listens to add (may be negative)
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Delete a genre and save the record
    Delete {
        /// Genre name
        genre: String,
    },
    /// Show the current genre counts
    Show,
    /// Show popularity statistics
    ///
    /// Reports total listens, number of genres, the average per genre, the
    /// most and least popular genre, and each genre's percentage share.
    Stats,
    /// Draw a bar chart of genre popularity as a PNG
    Chart {
        /// Output path (default: chart_path from config)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the sample session against the record
    Demo,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_record_path(cli.record)?;
    logging::init(cli.verbose || config.verbose, config.coloured)?;

    match cli.command {
        Commands::Add { genre, count } => {
            let mut store = commands::open_store_for_update(&config)?;
            commands::add_genre(&mut store, &genre, &count);
        }
        Commands::Delete { genre } => {
            let mut store = commands::open_store_for_update(&config)?;
            commands::delete_genre(&mut store, &genre);
        }
        Commands::Show => {
            let store = commands::open_store(&config);
            commands::show_data(&store);
        }
        Commands::Stats => {
            let store = commands::open_store(&config);
            commands::show_statistics(&store);
        }
        Commands::Chart { output } => {
            let store = commands::open_store(&config);
            commands::plot_chart(&store, &config.chart_options(output));
        }
        Commands::Demo => {
            let mut store = commands::open_store_for_update(&config)?;
            commands::run_demo(&mut store, &config.chart_options(None));
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&config)?,
            ConfigAction::Path => commands::show_path(),
            ConfigAction::Example => commands::show_example(),
            ConfigAction::Init => commands::init_config()?,
        },
    }

    Ok(())
}
