//! Command-line front end for drawing tarot readings.

use std::process;

use clap::{Parser, Subcommand};
use tarot_spread::{ReadingRequest, ReadingResult, SpreadAction, TarotReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tarot", about = "Draw a tarot reading for a named spread", version)]
struct Cli {
    /// Log resolution and shuffle details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a reading, e.g. `tarot draw 3 "Past, Present, Future"`
    Draw {
        /// Number of cards in the spread
        count: u32,

        /// Spread name (case, spacing and punctuation are ignored)
        name: String,

        /// Seed for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Keep the deck in card order (orientations are still random)
        #[arg(long)]
        unshuffled: bool,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available spreads
    Spreads {
        /// Only spreads with this many cards
        #[arg(short, long)]
        count: Option<u32>,
    },

    /// List the cards in the deck
    Cards,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tarot_spread=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tarot_spread=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(command: Commands) -> ReadingResult<()> {
    let reader = TarotReader::builtin()?;

    match command {
        Commands::Draw { count, name, seed, unshuffled, json } => {
            let request = ReadingRequest::new(count, name)
                .with_rng_seed(seed)
                .with_shuffle_order(!unshuffled);
            let reading = reader.draw(&request)?;
            if json {
                println!("{}", reading.to_json()?);
            } else {
                println!("{reading}");
            }
        }

        Commands::Spreads { count } => {
            let layouts = match count {
                Some(count) => reader.spreads().layouts_for(count),
                None        => reader.spreads().layouts(),
            };
            for layout in layouts {
                let status = match layout.action {
                    SpreadAction::Positional     => "",
                    SpreadAction::NotImplemented => " [not implemented]",
                };
                println!("{layout}{status}");
                println!("    {}", layout.description);
            }
        }

        Commands::Cards => {
            for card in reader.cards().cards() {
                println!("{:>2}  {card}", card.id);
                println!("    upright:  {}", card.upright);
                println!("    reversed: {}", card.reversed);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
