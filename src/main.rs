//! Aura Match CLI
//!
//! Usage:
//!   aura-match score --viewer a.json --candidate b.json
//!   aura-match rank --viewer a.json --candidates list.json
//!   aura-match swipe --direction super --elapsed-ms 600 --bio "..."
//!   aura-match message --text "Hello 😊" --elapsed-ms 30000
//!   aura-match seed --bio "..." --personality INFJ
//!   aura-match serve --addr 127.0.0.1:3000

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use aura_match::core::{run_server, AuraEngine, Matcher, ScoreCache};
use aura_match::types::{
    Aura, CompatibilityLabel, CompatibilityResult, MessageEvent, PersonalityType, Profile,
    RankedCandidate, SwipeDirection, SwipeEvent,
};
use aura_match::{AuraMatchError, Result, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "aura-match",
    version = VERSION,
    about = "Aura Match - compatibility scoring and behavioral aura engine",
    long_about = "Aura Match scores how compatible two dating profiles are and evolves\n\
                  each user's behavioral aura from swipes and messages.\n\n\
                  Profiles are JSON records with personalityType, attachmentStyle,\n\
                  interests and an optional behavioralProfile."
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a viewer against one candidate
    Score {
        #[arg(long)]
        viewer: PathBuf,
        #[arg(long)]
        candidate: PathBuf,
    },
    /// Rank a JSON array of candidates for a viewer
    Rank {
        #[arg(long)]
        viewer: PathBuf,
        #[arg(long)]
        candidates: PathBuf,
    },
    /// Apply a swipe to an aura
    Swipe {
        /// left, right or super
        #[arg(long)]
        direction: String,
        /// Time the card was on screen (milliseconds)
        #[arg(long, allow_hyphen_values = true)]
        elapsed_ms: i64,
        /// Candidate bio text
        #[arg(long, default_value = "")]
        bio: String,
        /// Current aura (JSON file); neutral when omitted
        #[arg(long)]
        aura: Option<PathBuf>,
    },
    /// Apply a sent message to an aura
    Message {
        #[arg(long)]
        text: String,
        /// Time since the previous message (milliseconds)
        #[arg(long, allow_hyphen_values = true)]
        elapsed_ms: Option<i64>,
        /// Current aura (JSON file); neutral when omitted
        #[arg(long)]
        aura: Option<PathBuf>,
    },
    /// Initial aura from bio and personality type
    Seed {
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        personality: Option<String>,
    },
    /// Run as HTTP API server
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let engine = AuraEngine::new();
    let matcher = Matcher::new();

    match args.command {
        Command::Score { viewer, candidate } => {
            let viewer: Profile = load_json(&viewer)?;
            let candidate: Profile = load_json(&candidate)?;
            let result = matcher.score(&viewer, &candidate);
            if args.json {
                print_json(&result)?;
            } else {
                print_result(&result);
            }
        }
        Command::Rank { viewer, candidates } => {
            let viewer: Profile = load_json(&viewer)?;
            let candidates: Vec<Profile> = load_json(&candidates)?;
            let cache = ScoreCache::new();
            let ranked = cache.rank(&matcher, &viewer, &candidates);
            if args.json {
                print_json(&ranked)?;
            } else {
                print_ranking(&ranked);
            }
        }
        Command::Swipe { direction, elapsed_ms, bio, aura } => {
            let direction: SwipeDirection = direction.parse()?;
            let current = load_optional_aura(aura.as_deref())?;
            let event = SwipeEvent::new(direction, bio, elapsed_ms);
            let next = engine.on_swipe(current.as_ref(), &event);
            print_aura(&next, args.json)?;
        }
        Command::Message { text, elapsed_ms, aura } => {
            let current = load_optional_aura(aura.as_deref())?;
            let event = MessageEvent::new(text, elapsed_ms);
            let next = engine.on_message(current.as_ref(), &event);
            print_aura(&next, args.json)?;
        }
        Command::Seed { bio, personality } => {
            let personality = personality
                .map(|p| p.parse::<PersonalityType>())
                .transpose()?;
            let aura = engine.seed(bio.as_deref(), personality);
            print_aura(&aura, args.json)?;
        }
        Command::Serve { addr } => {
            println!();
            println!("{}", format!("  Aura Match API Server v{}", VERSION).bold());
            println!("  Listening on {}", addr.cyan());
            println!();
            run_server(&addr).await?;
        }
    }

    Ok(())
}

/// Read and parse a JSON file
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| AuraMatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn load_optional_aura(path: Option<&Path>) -> Result<Option<Aura>> {
    path.map(load_json::<Aura>).transpose()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_aura(aura: &Aura, json: bool) -> Result<()> {
    if json {
        return print_json(aura);
    }
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        println!("{}", aura.to_terminal_string());
    } else {
        println!("{}", aura.to_parseable_string());
    }
    Ok(())
}

/// Label colored by how strong the match is
fn colored_label(label: CompatibilityLabel) -> colored::ColoredString {
    let text = label.label();
    match label {
        CompatibilityLabel::CosmicUnion | CompatibilityLabel::Soulmate => text.magenta().bold(),
        CompatibilityLabel::CrossedDestiny | CompatibilityLabel::CerebralFire => text.yellow().bold(),
        CompatibilityLabel::Refuge | CompatibilityLabel::Harmony => text.green(),
        CompatibilityLabel::Exploration => text.normal(),
    }
}

fn print_result(result: &CompatibilityResult) {
    println!(
        "{} {}  {}",
        "score".dimmed(),
        result.score.to_string().bold(),
        colored_label(result.label)
    );
    println!("  {:<13} {:>6.1}", "emotional", result.details.emotional);
    println!("  {:<13} {:>6.1}", "intellectual", result.details.intellectual);
    println!("  {:<13} {:>6.1}", "lifestyle", result.details.lifestyle);
    println!("  {:<13} {:>6.1}", "karmic", result.details.karmic);
}

fn print_ranking(ranked: &[RankedCandidate]) {
    if ranked.is_empty() {
        println!("{}", "No candidates".dimmed());
        return;
    }
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {:<20} {:>3}  {}",
            i + 1,
            entry.candidate_id,
            entry.result.score,
            colored_label(entry.result.label)
        );
    }
}
