use clap::Parser;
use specificity::app::render;
use specificity::core::validator;
use specificity::utils::error::{ErrorSeverity, SpecificityError};
use specificity::utils::{logger, validation::Validate};
use specificity::{
    CliConfig, ConfigProvider, FormSession, HttpCalculator, RequestCoordinator, SubmitOutcome,
};

fn exit_code(e: &SpecificityError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2, // service failure, resubmit
        ErrorSeverity::High => 1,   // input or configuration
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: SpecificityError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // Logging
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // Load and check settings before touching the network
    let settings = config.settings().unwrap_or_else(|e| fail(e));
    if let Err(e) = settings.validate() {
        fail(e);
    }
    tracing::info!("Using calculation service at {}", settings.endpoint());

    let calculator = HttpCalculator::from_config(&settings);

    // No counts on the command line: open the interactive form

    let Some(input) = config.counts().unwrap_or_else(|e| fail(e)) else {
        let mut session = FormSession::new(calculator);
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        session.run(stdin, &mut stdout).await?;
        return Ok(());
    };

    // One-shot mode
    if let Some(violation) = validator::first_violation(&input) {
        fail(SpecificityError::InvalidInput {
            message: format!("Invalid Input Values! {}", violation),
        });
    }

    // Submit and print the result
    let coordinator = RequestCoordinator::new(calculator);
    match coordinator.submit(input).await {
        Ok(SubmitOutcome::Recorded(result)) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = render::write_single(&mut stdout, &result, settings.output_format()) {
                fail(e);
            }
        }
        Ok(SubmitOutcome::Blocked) => fail(SpecificityError::InvalidInput {
            message: "Invalid Input Values!".to_string(),
        }),
        Err(e) => fail(e),
    }

    Ok(())
}
