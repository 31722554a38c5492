use anyhow::Context;
use clap::Parser;
use gym_membership::domain::ports::PriceCalculator;
use gym_membership::utils::{logger, validation::Validate};
use gym_membership::{
    CatalogPricing, ConsoleTerminal, PricingBreakdown, PricingRequest, SignupFlow, SignupOutcome,
    TomlConfig,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "toml-quote")]
#[command(about = "Quote a gym membership described in a TOML file")]
struct Args {
    /// Path to TOML quote file
    #[arg(short, long, default_value = "quote.toml")]
    config: String,

    /// Print the breakdown as JSON instead of the confirmation dialog
    #[arg(long)]
    json: bool,

    /// Confirm without asking, overriding quote.auto_confirm
    #[arg(short, long)]
    yes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct QuoteReport<'a> {
    request: &'a PricingRequest,
    breakdown: &'a PricingBreakdown,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load quote file '{}'", args.config))?;

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger(config.log_directive());
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("📁 Loaded quote from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let request = config.to_request();

    if args.json {
        let breakdown = match CatalogPricing.price(&request) {
            Ok(breakdown) => breakdown,
            Err(e) => {
                tracing::error!("❌ Pricing failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        };
        let report = QuoteReport {
            request: &request,
            breakdown: &breakdown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut flow = SignupFlow::new(ConsoleTerminal::stdio(), CatalogPricing)
        .with_auto_confirm(args.yes || config.auto_confirm());

    let exit_code = match flow.quote(&request)? {
        SignupOutcome::Confirmed { .. } => 0,
        SignupOutcome::Cancelled => 1,
        SignupOutcome::Failed(e) => e.exit_code(),
    };
    std::process::exit(exit_code);
}
