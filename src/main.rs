use clap::Parser;
use colored::*;
use tracing::{error, info};

use safet_guard::appeal::{self, AppealReason, DraftGenerator, GeneratorCapability};
use safet_guard::claim::{
    is_valid_order_id, DeadlineChecker, CLAIM_WINDOW_DAYS, URGENT_THRESHOLD_DAYS,
};
use safet_guard::cli::{Cli, Commands};
use safet_guard::config::Config;
use safet_guard::dashboard::{demo_claims, load_claims, DashboardSummary};
use safet_guard::{utils, Result};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("safet_guard=debug,info")
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Check {
            order_date,
            order_id,
            format,
        } => check_claim(&order_date, order_id.as_deref(), &format),

        Commands::Dashboard { file, format } => {
            info!("Aggregating claim batch...");
            show_dashboard(file.as_deref(), &format)
        }

        Commands::Appeal {
            order_id,
            reason,
            ai,
        } => {
            info!("Drafting appeal for order: {}", order_id);
            run_appeal(&config, &order_id, &reason, ai).await
        }

        Commands::Init => {
            info!("Initializing...");
            initialize(&config)
        }
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn paint(text: &str, color: &str) -> ColoredString {
    match color {
        "red" => text.red(),
        "green" => text.green(),
        "gray" => text.bright_black(),
        "orange" => text.yellow(),
        _ => text.normal(),
    }
}

fn check_claim(order_date: &str, order_id: Option<&str>, format: &str) -> Result<()> {
    if let Some(id) = order_id {
        if !is_valid_order_id(id) {
            println!("{}", appeal::REJECT_INVALID_ORDER_ID.red());
            return Ok(());
        }
    }

    let result = DeadlineChecker::check(order_date);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n{}", "=== Claim Window Check ===".cyan().bold());
    if let Some(id) = order_id {
        println!("Order ID:    {}", id);
    }
    println!("Order Date:  {}", order_date);
    println!(
        "Status:      {}",
        paint(&result.status.to_string(), result.color).bold()
    );
    if !result.time_left_en.is_empty() {
        println!("Time Left:   {}", result.time_left_en);
    }
    println!("\n{}", result.message_zh);
    println!("{}", result.message_en);

    Ok(())
}

fn show_dashboard(file: Option<&std::path::Path>, format: &str) -> Result<()> {
    let claims = match file {
        Some(path) => load_claims(path)?,
        None => demo_claims(),
    };

    let summary = DashboardSummary::build(&claims);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    summary.print_summary();

    if !summary.order_details.is_empty() {
        println!("\n{}", "Claims:".yellow());
        utils::print_table_border(60);
        utils::print_table_row(
            &["Order ID", "Date", "Status", "Time Left"],
            &[14, 12, 9, 18],
        );
        utils::print_table_border(60);

        for detail in &summary.order_details {
            utils::print_table_row(
                &[
                    &detail.order_id,
                    &detail.order_date,
                    &detail.status.to_string(),
                    &detail.time_left_en,
                ],
                &[14, 12, 9, 18],
            );
        }
        utils::print_table_border(60);
    }

    Ok(())
}

async fn run_appeal(config: &Config, order_id: &str, reason_code: &str, ai: bool) -> Result<()> {
    if !ai {
        println!("{}", appeal::draft_appeal(reason_code, order_id));
        return Ok(());
    }

    if !is_valid_order_id(order_id) {
        println!("{}", appeal::REJECT_INVALID_ORDER_ID.red());
        return Ok(());
    }

    match reason_code.parse::<AppealReason>() {
        Ok(reason) => {
            let generator = DraftGenerator::from_config(config);
            let draft = appeal::appeal_with_fallback(&generator, reason, order_id).await;
            println!("{}", draft);
        }
        Err(()) => println!("{}", appeal::REJECT_UNSUPPORTED_REASON.red()),
    }

    Ok(())
}

fn initialize(config: &Config) -> Result<()> {
    println!("{}", "Initializing SAFE-T claim guard...".green());
    println!("{}", "✓ Configuration loaded".green());

    println!("\n{}", "Configuration:".cyan());
    println!("  Claim window:    {} days", CLAIM_WINDOW_DAYS);
    println!("  Urgency cutoff:  {} days", URGENT_THRESHOLD_DAYS);

    match &config.generator {
        Some(generator) => {
            println!("  Generator:       {}", generator.endpoint);
            println!("  Model:           {}", generator.model);
            match &generator.api_key {
                Some(key) => println!("  API key:         {}", utils::mask_credential(key)),
                None => println!("  API key:         {}", "not set".yellow()),
            }
        }
        None => println!(
            "  Generator:       {}",
            "unavailable (template drafts only)".yellow()
        ),
    }

    let capability = GeneratorCapability::from_config(config);
    if capability.is_available() {
        println!("\n{}", "✓ AI draft generator configured".green());
    } else {
        println!(
            "\n{}",
            "AI draft generator not configured; appeals use templates".yellow()
        );
    }

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!(
        "  {} to check one order",
        "safet-guard check 2026-02-10".yellow()
    );
    println!(
        "  {} to view the dashboard",
        "safet-guard dashboard".yellow()
    );
    println!(
        "  {} to draft an appeal",
        "safet-guard appeal 114-9283-001 --reason EMPTY_BOX".yellow()
    );
    Ok(())
}
