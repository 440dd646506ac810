use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use priority_list::config::{load_people, Config, PEOPLE_FILE};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "priority-list")]
#[command(about = "Rank exported GitHub issues/PRs by priority", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the `*s.*-*.json` exports
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// People directory mapping GitHub logins to Slack ids (defaults to <DIR>/people.json)
    #[arg(long)]
    people: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    priority_list::notify::install_crypto_provider();

    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();

    // Every issue in the run is aged against the same instant
    let now = chrono::Utc::now();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(errors) => {
            eprintln!("Configuration errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!("weights: {:?}", config.weights);

    let people_path = cli.people.unwrap_or_else(|| cli.dir.join(PEOPLE_FILE));
    let people = match load_people(&people_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    tracing::debug!("{} people in directory", people.len());

    let issues = match priority_list::github::load_issues(&cli.dir) {
        Ok(issues) => issues,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    let total = issues.len();

    let ranked = priority_list::scoring::rank(issues, &config.weights, now);
    tracing::debug!("{} of {} issues ranked", ranked.len(), total);
    for scored in &ranked {
        let b = &scored.result.breakdown;
        tracing::debug!(
            "{} score={:.1} stale={}d old={}d base={:.1} labels=x{} multiplier=x{:.3} type=x{}",
            scored.issue.short_ref(),
            scored.score(),
            b.days_stale,
            b.days_old,
            b.base,
            b.label_factor,
            b.label_multiplier,
            b.type_multiplier
        );
    }

    let rows = priority_list::scoring::display_window(ranked.len());
    let source_link = config.provenance.source_link();

    println!(
        "{}",
        priority_list::output::format_table(&ranked, &rows, &source_link)
    );

    let payload = priority_list::output::build_payload(&ranked, &rows, &source_link, &people);
    if let Err(e) = priority_list::notify::deliver(config.slack_webhook.as_deref(), &payload).await
    {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_NETWORK);
    }

    tracing::debug!("done in {:?}", start_time.elapsed());
    std::process::exit(EXIT_SUCCESS);
}
