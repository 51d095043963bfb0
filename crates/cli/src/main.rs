use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::config::{MIN_AVERAGE_RATING, MIN_NUM_VOTES, MIN_START_YEAR};
use pipeline::{CurationConfig, CurationReport, curate_to_file};
use publisher::{Publisher, PublisherConfig, SqsQueue};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Movie Curator - IMDb catalog curation and publishing
#[derive(Parser)]
#[command(name = "movie-curator")]
#[command(about = "Curate notable movies from the IMDb export and publish them to a queue", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preprocess the IMDb dataset and write a `movies.csv` file
    Curate {
        /// Directory containing title.basics.tsv, title.akas.tsv and title.ratings.tsv
        path: PathBuf,

        /// Directory in which to create the output
        #[arg(long, default_value = "./")]
        output: PathBuf,

        /// Earliest release year to keep
        #[arg(long, default_value_t = MIN_START_YEAR)]
        min_year: i32,

        /// Minimum average rating
        #[arg(long, default_value_t = MIN_AVERAGE_RATING)]
        min_rating: f64,

        /// Minimum number of votes
        #[arg(long, default_value_t = MIN_NUM_VOTES)]
        min_votes: u64,

        /// Release regions a title needs an alias in. The catalog is defined
        /// as US/GB releases; any other list produces a different catalog
        #[arg(long, value_delimiter = ',', default_value = "US,GB")]
        regions: Vec<String>,
    },

    /// Load `movies.csv` and send each row as a message to the queue
    Publish {
        /// Directory containing movies.csv
        path: PathBuf,

        /// URL of the SQS queue
        #[arg(long, env = "MOVIES_QUEUE_URL")]
        queue: String,

        /// Override the SQS endpoint (e.g. a local emulator)
        #[arg(long, env = "MOVIES_QUEUE_ENDPOINT")]
        endpoint_url: Option<String>,

        /// Delivery delay applied to each message. Consumers expect the
        /// standard 5 s delay; change it only for local testing
        #[arg(long, default_value_t = 5)]
        delay_seconds: u64,

        /// Number of sends in flight at once
        #[arg(long, default_value_t = 1)]
        concurrency: usize,

        /// Print progress after this many messages
        #[arg(long, default_value_t = 100)]
        progress_every: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Curate {
            path,
            output,
            min_year,
            min_rating,
            min_votes,
            regions,
        } => {
            let config = CurationConfig {
                min_start_year: min_year,
                regions,
                min_average_rating: min_rating,
                min_num_votes: min_votes,
                ..CurationConfig::default()
            };
            handle_curate(path, output, &config)?
        }
        Commands::Publish {
            path,
            queue,
            endpoint_url,
            delay_seconds,
            concurrency,
            progress_every,
        } => {
            let config = PublisherConfig {
                delay: Duration::from_secs(delay_seconds),
                concurrency,
                progress_every,
            };
            handle_publish(path, queue, endpoint_url, config).await?
        }
    }

    Ok(())
}

/// Handle the 'curate' command
fn handle_curate(path: PathBuf, output: PathBuf, config: &CurationConfig) -> Result<()> {
    println!("Curating IMDb export from {}...", path.display());

    let outcome = curate_to_file(&path, &output, config)?;

    print_report(&outcome.report);
    println!(
        "{} Wrote output to '{}'",
        "✓".green(),
        outcome.output_file.display()
    );
    Ok(())
}

/// Handle the 'publish' command
async fn handle_publish(
    path: PathBuf,
    queue_url: String,
    endpoint_url: Option<String>,
    config: PublisherConfig,
) -> Result<()> {
    // One client for the whole run
    let queue = SqsQueue::from_env(queue_url, endpoint_url.as_deref()).await;
    info!("Publishing to {}", queue.queue_url());
    let publisher = Publisher::new(queue, config)?;

    println!("Sending messages");
    let summary = publisher
        .publish_dir(&path, |progress| {
            println!("Sent {}/{} messages.", progress.sent, progress.total);
        })
        .await
        .with_context(|| format!("Failed to publish movies from {}", path.display()))?;

    println!(
        "{} Sent {}/{} messages in {:?}",
        "✓".green(),
        summary.sent,
        summary.total,
        summary.elapsed
    );
    Ok(())
}

/// Helper function to print per-stage row counts
fn print_report(report: &CurationReport) {
    println!("{}", "Curation summary:".bold().blue());
    println!("{}Titles kept: {}", "• ".cyan(), report.titles);
    println!("{}Aliases kept: {}", "• ".cyan(), report.aliases);
    println!("{}Ratings kept: {}", "• ".cyan(), report.ratings);
    println!("{}Joined rows: {}", "• ".cyan(), report.joined_rows);
    println!("{}Curated movies: {}", "• ".cyan(), report.curated);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curate_defaults() {
        let cli = Cli::try_parse_from(["movie-curator", "curate", "data/imdb"]).unwrap();
        match cli.command {
            Commands::Curate {
                output,
                min_year,
                min_rating,
                min_votes,
                regions,
                ..
            } => {
                assert_eq!(output, PathBuf::from("./"));
                assert_eq!(min_year, 1980);
                assert_eq!(min_rating, 6.0);
                assert_eq!(min_votes, 100_000);
                assert_eq!(regions, vec!["US", "GB"]);
            }
            _ => panic!("expected curate command"),
        }
    }

    #[test]
    fn test_publish_defaults() {
        let cli = Cli::try_parse_from([
            "movie-curator",
            "publish",
            "./",
            "--queue",
            "https://sqs.us-east-1.amazonaws.com/123456789012/movies",
        ])
        .unwrap();
        match cli.command {
            Commands::Publish {
                delay_seconds,
                concurrency,
                progress_every,
                ..
            } => {
                assert_eq!(delay_seconds, 5);
                assert_eq!(concurrency, 1);
                assert_eq!(progress_every, 100);
            }
            _ => panic!("expected publish command"),
        }
    }

    #[test]
    fn test_regions_override() {
        let cli =
            Cli::try_parse_from(["movie-curator", "curate", "data/imdb", "--regions", "US,CA"])
                .unwrap();
        match cli.command {
            Commands::Curate { regions, .. } => assert_eq!(regions, vec!["US", "CA"]),
            _ => panic!("expected curate command"),
        }
    }
}
