//! cater-price - CLI for checking marketplace prices, combo totals and draft keys.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use cater_pricing::input::{load_combo_request, load_drafts, load_services};
use cater_pricing::pricing::{format_amount, format_menu_item_price};
use cater_pricing::{
    compute_enhanced_draft_group_key, consolidate_drafts, format_unified_service_price,
    get_menu_items, validate_combo_request, validate_service, ValidationResult, UNGROUPED_KEY,
};

/// Check Cater Directly service prices, combo totals and draft group keys.
#[derive(Parser, Debug)]
#[command(name = "cater-price")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Run input validation and fail on errors
    #[arg(long, global = true)]
    validate: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the display price of one or more services
    Price {
        /// Service JSON file (object or array), `-` for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Also list each menu item with its price
        #[arg(long)]
        items: bool,
    },

    /// Print the menu items extracted from a service as JSON
    Menu {
        /// Service JSON file, `-` for stdin
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the cost breakdown of a combo order as JSON
    Combo {
        /// Combo request JSON file, `-` for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Override the request's headcount
        #[arg(long)]
        headcount: Option<u32>,
    },

    /// Print the group key of one or more saved drafts
    GroupKey {
        /// Draft JSON file (object or array), `-` for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Print the consolidated draft groups as JSON
        #[arg(long)]
        consolidate: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Price { input, items } => {
            let services = load_services(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            debug!("Loaded {} service(s)", services.len());

            for service in &services {
                if args.validate {
                    report(&validate_service(service))?;
                }

                println!("{}", format_unified_service_price(service));

                if items {
                    for item in get_menu_items(service) {
                        println!("  {}: {}", item.name, format_menu_item_price(&item));
                    }
                }
            }
        }

        Command::Menu { input } => {
            let services = load_services(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;

            let menus: Vec<_> = services.iter().map(get_menu_items).collect();
            let json = match menus.as_slice() {
                [single] => serde_json::to_string_pretty(single)?,
                _ => serde_json::to_string_pretty(&menus)?,
            };
            println!("{}", json);
        }

        Command::Combo { input, headcount } => {
            let mut request = load_combo_request(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;

            if let Some(headcount) = headcount {
                request.headcount = headcount;
            }

            if args.validate {
                report(&validate_combo_request(&request))?;
            }

            let total = request.calculate();
            info!(
                "{} combo(s) for {} guest(s): {}",
                total.total_combos_ordered,
                total.headcount,
                format_amount(total.total_price)
            );
            println!("{}", serde_json::to_string_pretty(&total)?);
        }

        Command::GroupKey { input, consolidate } => {
            let drafts = load_drafts(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;

            if consolidate {
                let groups = consolidate_drafts(&drafts);
                info!("{} draft(s) in {} group(s)", drafts.len(), groups.len());
                println!("{}", serde_json::to_string_pretty(&groups)?);
                return Ok(());
            }

            for (idx, draft) in drafts.iter().enumerate() {
                let key = compute_enhanced_draft_group_key(draft);
                if args.validate && key == UNGROUPED_KEY {
                    warn!("Draft {} has no name, date, location or services", idx + 1);
                }
                println!("{}", key);
            }
        }
    }

    Ok(())
}

/// Log validation findings and fail if there are errors.
fn report(result: &ValidationResult) -> Result<()> {
    for warning in &result.warnings {
        warn!("{}", warning);
    }

    for err in &result.errors {
        error!("{}", err);
    }

    if !result.passed {
        anyhow::bail!("Validation failed");
    }

    Ok(())
}
