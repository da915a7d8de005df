use anyhow::{Context, Result};
use catalog::{CatalogIndex, Money};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{SearchCriteria, SearchEngine, SearchOutcome, TierScope};
use pricing::Tier;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// hostelctl - Hostel search and price-tier catalog browser
#[derive(Parser)]
#[command(name = "hostelctl")]
#[command(about = "Search hostels and browse price tiers", long_about = None)]
struct Cli {
    /// Path to the catalog seed file
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    /// Print raw JSON instead of formatted output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search hostels by location, room type and price bounds
    Search {
        /// Location or hostel-name substring (case-insensitive)
        #[arg(long)]
        location: Option<String>,

        /// Room type substring, e.g. "single"
        #[arg(long)]
        room_type: Option<String>,

        /// Inclusive lower price bound (smallest currency units)
        #[arg(long)]
        min_price: Option<Money>,

        /// Inclusive upper price bound (smallest currency units)
        #[arg(long)]
        max_price: Option<Money>,
    },

    /// List every hostel in a price tier
    Tiers {
        /// Which tier to list
        tier: TierArg,

        /// Only include hostels currently marked available
        #[arg(long)]
        available_only: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TierArg {
    Affordable,
    MidRange,
    Premium,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Affordable => Tier::Affordable,
            TierArg::MidRange => Tier::MidRange,
            TierArg::Premium => Tier::Premium,
        }
    }
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

    let start = Instant::now();
    let index = Arc::new(
        CatalogIndex::load_from_file(&cli.catalog)
            .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?,
    );
    let (hostels, rooms) = index.counts();
    eprintln!(
        "{} Loaded {} hostels / {} rooms in {:?}",
        "✓".green(),
        hostels,
        rooms,
        start.elapsed()
    );

    match cli.command {
        Commands::Search {
            location,
            room_type,
            min_price,
            max_price,
        } => {
            let engine = SearchEngine::new(index.clone(), index);
            let criteria = SearchCriteria {
                location,
                room_type,
                min_price,
                max_price,
            };
            let outcome = engine.search(&criteria).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&outcome);
            }
        }
        Commands::Tiers {
            tier,
            available_only,
        } => {
            let engine = SearchEngine::new(index.clone(), index).with_tier_scope(TierScope {
                respect_availability: available_only,
            });
            let tier: Tier = tier.into();
            let members = engine.list_tier(tier).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&members)?);
            } else {
                print_tier(tier, &members);
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Empty { reason, .. } => {
            println!("{} {}", "No results:".yellow().bold(), reason);
        }
        SearchOutcome::Matches(results) => {
            println!(
                "{}",
                format!("{} hostels match", results.count).bold().blue()
            );
            for entry in &results.entries {
                println!(
                    "{} ({}) {} - {} rooms, {} to {}",
                    entry.hostel.name.bold(),
                    entry.hostel.location,
                    entry
                        .primary_image
                        .as_deref()
                        .unwrap_or("no image")
                        .dimmed(),
                    entry.rooms.len(),
                    format_price(entry.price_range.min).green(),
                    format_price(entry.price_range.max).green(),
                );
                for room in &entry.rooms {
                    println!(
                        "  - {} {} (sleeps {}) {}",
                        room.id.dimmed(),
                        room.room_type.label(),
                        room.max_occupancy,
                        format_price(room.price),
                    );
                }
            }
        }
    }
}

fn print_tier(tier: Tier, members: &[catalog::Hostel]) {
    println!(
        "{}",
        format!("{} hostels in tier '{}'", members.len(), tier)
            .bold()
            .blue()
    );
    for hostel in members {
        let availability = if hostel.available {
            "available".green()
        } else {
            "unavailable".red()
        };
        println!(
            "{} ({}) [{}]",
            hostel.name.bold(),
            hostel.location,
            availability
        );
    }
}

fn format_price(amount: Money) -> String {
    // Group thousands for readability: 1200000 -> "1,200,000"
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
