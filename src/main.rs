use clap::Parser;
use gym_membership::utils::{logger, validation::Validate};
use gym_membership::{CatalogPricing, CliConfig, ConsoleTerminal, SignupFlow, SignupOutcome};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gym-membership signup");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let mut flow =
        SignupFlow::new(ConsoleTerminal::stdio(), CatalogPricing).with_auto_confirm(config.yes);

    let result = match config.preset_request() {
        Some(request) => flow.quote(&request),
        None => flow.run(),
    };

    let exit_code = match result {
        Ok(SignupOutcome::Confirmed { total, .. }) => {
            tracing::info!("✅ Signup confirmed, total {}", total);
            0
        }
        Ok(SignupOutcome::Cancelled) => 1,
        Ok(SignupOutcome::Failed(e)) => {
            eprintln!("💡 {}", e.recovery_suggestion());
            e.exit_code()
        }
        Err(e) => {
            tracing::error!(
                "❌ Signup aborted: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
