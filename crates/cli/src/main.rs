//! `brewsim`: coffee shop operations from the command line.
//!
//! Sets up the database, seeds baseline records, drives the transaction
//! simulator, and prints the reporting views.

mod render;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use brewsim_core::OrderId;
use brewsim_sim::{ReorderLog, SimConfig, Simulator, scheduler};
use brewsim_store::{ShopStore, seed_if_empty};

/// Coffee shop retail operations simulator.
#[derive(Parser, Debug)]
#[command(name = "brewsim")]
#[command(about = "Simulate and inspect coffee shop retail operations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the database file and its schema.
    Init,
    /// Populate an empty database with baseline records.
    Seed,
    /// Run a single simulation tick (the shop may be closed, or the
    /// tick may decline by chance).
    Tick,
    /// Run the standalone simulation loop until interrupted.
    Run,
    /// Print a reporting view.
    Report {
        #[command(subcommand)]
        view: ReportView,
        /// Emit JSON instead of text.
        #[arg(long, global = true)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ReportView {
    /// Headline counts, the latest balance, and recent reorders.
    Overview,
    /// Customers, most recently registered first.
    Customers {
        /// Only the N most recent.
        #[arg(long)]
        limit: Option<i64>,
    },
    /// All employees.
    Employees,
    /// The menu, active items flagged.
    Menu,
    /// Stock on hand with reorder thresholds.
    Inventory,
    /// Daily balance history.
    Balance,
    /// Recent orders, newest first.
    Orders {
        /// Maximum rows to print.
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Full receipt for one order.
    Receipt {
        /// Order id.
        id: i64,
    },
    /// Recent reorder log entries.
    Reorders {
        /// Maximum entries to print.
        #[arg(long, default_value = "10")]
        lines: usize,
    },
    /// Hourly sales buckets for one business date.
    Hourly {
        /// Business date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    brewsim_observability::init();

    let cli = Cli::parse();
    let config = SimConfig::from_env();
    let store = ShopStore::connect(&config.db_path)
        .await
        .with_context(|| format!("opening database {}", config.db_path))?;

    match cli.command {
        Command::Init => {
            store.init_schema().await?;
            println!("database ready at {}", config.db_path);
        }
        Command::Seed => {
            store.init_schema().await?;
            let mut rng = StdRng::from_entropy();
            if seed_if_empty(&store, &mut rng).await? {
                println!("seeded baseline records");
            } else {
                println!("database already has records; nothing to do");
            }
        }
        Command::Tick => {
            store.init_schema().await?;
            let sim = Simulator::new(store, config);
            let mut rng = StdRng::from_entropy();
            match scheduler::tick_once(&sim, &mut rng).await? {
                Some(outcome) => println!(
                    "order #{} committed: ${} across {} line(s), {} restock(s)",
                    outcome.order_id,
                    brewsim_core::dollars(outcome.total_cents),
                    outcome.line_count,
                    outcome.restocks.len(),
                ),
                None => println!("no transaction this tick"),
            }
        }
        Command::Run => {
            store.init_schema().await?;
            let sim = Simulator::new(store, config);
            let mut rng = StdRng::from_entropy();
            scheduler::run_standalone(&sim, &mut rng).await?;
        }
        Command::Report { view, json } => run_report(&store, &config, view, json).await?,
    }
    Ok(())
}

async fn run_report(
    store: &ShopStore,
    config: &SimConfig,
    view: ReportView,
    json: bool,
) -> anyhow::Result<()> {
    match view {
        ReportView::Overview => {
            let overview = store.overview().await?;
            let log = ReorderLog::new(&config.reorder_log_path);
            let reorders = log.tail(5)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                render::overview(&overview, &reorders);
            }
        }
        ReportView::Customers { limit } => {
            let customers = match limit {
                Some(limit) => store.recent_customers(limit).await?,
                None => store.list_customers().await?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&customers)?);
            } else {
                render::customers(&customers);
            }
        }
        ReportView::Employees => {
            let employees = store.list_employees().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&employees)?);
            } else {
                render::employees(&employees);
            }
        }
        ReportView::Menu => {
            let items = store.list_menu_items().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                render::menu(&items);
            }
        }
        ReportView::Inventory => {
            let stock = store.list_stock().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stock)?);
            } else {
                render::inventory(&stock);
            }
        }
        ReportView::Balance => {
            let balances = store.list_balances().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&balances)?);
            } else {
                render::balances(&balances);
            }
        }
        ReportView::Orders { limit } => {
            let orders = store.order_summaries(Some(limit)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&orders)?);
            } else {
                render::orders(&orders);
            }
        }
        ReportView::Receipt { id } => {
            match store.receipt(OrderId::new(id)).await? {
                Some(receipt) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&receipt)?);
                    } else {
                        render::receipt(&receipt);
                    }
                }
                None => anyhow::bail!("no order with id {id}"),
            }
        }
        ReportView::Reorders { lines } => {
            let log = ReorderLog::new(&config.reorder_log_path);
            let entries = log.tail(lines)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("no reorders logged");
            } else {
                for entry in &entries {
                    println!("{entry}");
                }
            }
        }
        ReportView::Hourly { date } => {
            let date = date.unwrap_or_else(|| config.hours().business_date(Utc::now()));
            let buckets = store.hourly_sales(date, config.offset()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&buckets)?);
            } else {
                render::hourly(date, &buckets);
            }
        }
    }
    Ok(())
}
