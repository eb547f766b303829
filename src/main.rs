use std::{env, process};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use rsstart::cli::{main_with, Deps};
use rsstart::diagnostics;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logging();

    let argv: Vec<String> = env::args().collect();
    let deps = Deps::new();
    let code = main_with(&argv, &deps).await;
    process::exit(code);
}

fn setup_logging() {
    let filter = if diagnostics::enabled() {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    // Formatted output goes to stderr; stdout stays clean for command output
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!("Debug mode: diagnostics enabled");
}
