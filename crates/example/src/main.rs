//! Example study-assistant CLI.
//!
//! Runs one capability and prints its output as JSON.
//!
//! # Usage
//!
//! ```bash
//! study <capability> [--provider <id>] [--model <id>] [--log-format pretty|compact|json] <text...>
//! ```
//!
//! # Example
//!
//! ```bash
//! study summarize "Photosynthesis converts light energy into chemical energy."
//! study tutor --provider groq "Why is the sky blue?"
//! ```

use clap::Parser;
use example::{Study, StudyArgs, report};
use scholar_bridge::BridgeConfig;
use scholar_core::TracingSetup;
use scholar_models::EnvSecrets;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let args = StudyArgs::parse();

    TracingSetup::new().with_format(args.log_format).init();

    let config = BridgeConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let study = Study::from_config(&config, Arc::new(EnvSecrets)).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let outcome = study.run(&args).await;
    let code = report(outcome, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    std::process::exit(code);
}
