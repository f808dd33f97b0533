
use datecheck::util::env::load_dotenv;
use datecheck::util::file::read_json_payload;
use datecheck::{AppConfig, DateFormatValidator, ValidationOutcome};
use std::env;
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: datecheck <payload.json>... (use - for stdin)");
        process::exit(2);
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            process::exit(2);
        }
    };
    debug!("Config:\n {:#?}", config);

    let validator = DateFormatValidator::from_config(&config);
    let mut failed = 0;

    for path in &paths {
        let payload = match read_json_payload(path) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Cannot read {}: {}", path, e);
                process::exit(e.exit_code());
            }
        };

        let outcome = validator.validate_payload(config.payload_kind, &payload);
        if config.log.log_results {
            match serde_json::to_string(&outcome.results()) {
                Ok(json) => info!("{}: {}", path, json),
                Err(e) => error!("Cannot serialize results for {}: {}", path, e),
            }
        }

        print_outcome(path, &outcome);
        if !outcome.passed {
            failed += 1;
        }
    }

    info!("Checked {} payload(s), {} failed", paths.len(), failed);
    if failed > 0 {
        process::exit(1);
    }
}

fn print_outcome(path: &str, outcome: &ValidationOutcome) {
    let results = outcome.results();
    let verdict = if outcome.passed { "ok" } else { "FAILED" };

    println!(
        "{}: {} ({} error(s), {} warning(s))",
        path, verdict, results.error_count, results.warning_count
    );
    for error in &results.errors {
        println!("  error: {}", error);
    }
    for warning in &results.warnings {
        println!("  warning: {}", warning);
    }
}
