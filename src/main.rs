use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use scorecard::card::{load_card, RoundSettings};
use scorecard::output::{self, RoundReport};
use scorecard::scoring::{self, HoleInput};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_INVALID_ROUND: i32 = 5;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a round card (YAML)
    Card {
        /// Path to the round card
        file: PathBuf,

        /// Playing handicap (overrides the card and config)
        #[arg(long, allow_negative_numbers = true)]
        handicap: Option<i32>,

        /// Number of holes in the front half
        #[arg(long)]
        split_at: Option<usize>,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Score the card even if it fails validation
        #[arg(long)]
        no_validate: bool,
    },
    /// Score a single hole
    Hole {
        #[arg(long)]
        par: i32,

        /// Strokes taken (0 = not played)
        #[arg(long, default_value_t = 0)]
        gross: i32,

        #[arg(long)]
        stroke_index: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        handicap: i32,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(about = "Golf round scoring: net scores and Stableford points", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/scorecard/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config = match scorecard::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let use_colors = config.color.unwrap_or(true) && output::should_use_colors();

    match cli.command {
        Commands::Card {
            file,
            handicap,
            split_at,
            format,
            no_validate,
        } => {
            let card = match load_card(&file) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Card error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let holes = match card.round_holes() {
                Ok(h) => h,
                Err(e) => {
                    eprintln!("Card error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let settings = RoundSettings::resolve(handicap, split_at, &card, &config);
            tracing::debug!(
                holes = holes.len(),
                handicap = settings.handicap,
                split_at = settings.split_at,
                "scoring round"
            );

            if let Err(errors) = scoring::validate_round(&holes, settings.handicap) {
                if no_validate {
                    for error in &errors {
                        tracing::warn!("{}", error);
                    }
                } else {
                    eprintln!("Round card errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_INVALID_ROUND);
                }
            }

            let report = RoundReport {
                handicap: settings.handicap,
                split_at: settings.split_at,
                totals: scoring::calculate_split(&holes, settings.handicap, settings.split_at),
                holes: scoring::score_round(&holes, settings.handicap),
            };

            match format {
                Format::Table => {
                    if let Some((course, tee)) = card.course_tee() {
                        println!("{}", output::format_course_line(course, tee, use_colors));
                    }
                    println!("{}", output::format_card_table(&report, use_colors));
                }
                Format::Tsv => println!("{}", output::format_tsv(&report)),
                Format::Json => print_json(&report),
            }
        }
        Commands::Hole {
            par,
            gross,
            stroke_index,
            handicap,
            format,
        } => {
            let score = scoring::calculate_hole_score(HoleInput {
                par,
                gross,
                stroke_index,
                handicap,
            });

            match format {
                Format::Table => println!("{}", output::format_hole_score(&score, use_colors)),
                Format::Tsv => println!("{}\t{}\t{}", score.shots, score.net, score.points),
                Format::Json => print_json(&score),
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match output::format_json(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}
