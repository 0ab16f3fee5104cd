use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::RecordFilter;

#[derive(Parser, Debug)]
#[command(
    name = "award-intervals",
    about = "Report the shortest and longest gaps between consecutive award wins per producer",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Award list file [default: $CSV_PATH, then config, then data/movielist.csv]
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Config file [default: ./.award-intervals/config.toml, fallback ~/.config/award-intervals/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print a summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Producers with the shortest and longest gaps between consecutive wins
    Awards,
    /// Same as `awards`, with links to producer and movie lookups
    Details,
    /// List records, optionally filtered
    Movies(MovieArgs),
    /// All records attributed to one producer
    Producer {
        /// Producer name, exactly as stored
        name: String,
    },
    /// Winning titles of one year
    Winners {
        year: i32,
    },
    /// Flag a producer/studio pair that keeps reappearing
    Predict {
        #[arg(long)]
        producer: String,
        #[arg(long)]
        studio: String,
    },
    /// Split an attribution field into producer names
    Split {
        text: String,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct MovieArgs {
    /// Filter by year
    #[arg(long)]
    pub year: Option<i32>,

    /// Filter by producer
    #[arg(long)]
    pub producer: Option<String>,

    /// Filter by title
    #[arg(long)]
    pub title: Option<String>,

    /// Only winning records
    #[arg(long)]
    pub winners_only: bool,
}

impl From<&MovieArgs> for RecordFilter {
    fn from(args: &MovieArgs) -> Self {
        RecordFilter {
            year: args.year,
            producer: args.producer.clone(),
            title: args.title.clone(),
            won: args.winners_only.then_some(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
