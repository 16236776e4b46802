use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api;
use crate::batch;
use crate::config::constant::SEED;
use crate::config::Settings;
use crate::domain::solution::Quote;
use crate::domain::types::Order;
use crate::error::Result;
use crate::fixtures::data_generator::generate_random_orders;
use crate::network::NetworkModel;
use crate::simulation::{RouteSimulator, SearchStrategy};

#[derive(Parser)]
#[command(version, about = "Minimum delivery cost estimator", long_about = None)]
pub struct Cli {
    /// Try every visiting order instead of the starting-center heuristic.
    #[arg(long, global = true)]
    exhaustive: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve `POST /calculate-cost` over HTTP.
    Serve,
    /// Quote one order given as `A=1,G=2`.
    Quote { order: Order },
    /// Quote every row of a CSV file.
    Batch { input: PathBuf, output: PathBuf },
    /// Quote randomly generated orders.
    Sample {
        count: usize,
        #[arg(long, default_value_t = SEED)]
        seed: u64,
    },
}

/// Initialize tracing and environment
fn init_tracing_and_env() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "delivery_cost=info".into()))
        .with(fmt::layer())
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_and_env();

    let mut settings = Settings::from_env()?;
    if cli.exhaustive {
        settings.search = SearchStrategy::Exhaustive;
    }
    debug!("Running with {:?}", settings);

    let network = NetworkModel::standard();
    let simulator = RouteSimulator::with_strategy(&network, settings.search);

    match cli.command {
        Command::Serve => api::run(&settings).await?,
        Command::Quote { order } => print_quote(&order, &simulator.quote(&order)),
        Command::Batch { input, output } => {
            let quoted = batch::quote_file(&simulator, &input, &output)?;
            info!("Batch complete: {} order(s)", quoted);
        }
        Command::Sample { count, seed } => {
            for order in generate_random_orders(count, seed) {
                print_quote(&order, &simulator.quote(&order));
            }
        }
    }

    Ok(())
}

fn print_quote(order: &Order, quote: &Quote) {
    let label = if order.requested_units() == 0 {
        "(empty)".to_string()
    } else {
        order.to_string()
    };

    let total = format!("{:.2}", quote.minimum_cost);
    if quote.minimum_cost.is_finite() {
        println!("{label}: {}", total.green());
    } else {
        println!("{label}: {}", "unreachable".red());
    }

    for branch in &quote.branches {
        let sequence: Vec<String> = branch.sequence.iter().map(|c| c.to_string()).collect();
        let line = format!(
            "  start {} via {}: {:.2}",
            branch.start,
            sequence.join(" > "),
            branch.cost
        );
        if branch.is_reachable() {
            println!("{line}");
        } else {
            println!("{}", line.red());
        }
    }
}
