use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, filter::Builder};

mod command;
mod highscore_store;
mod settings;
mod util;

fn main() -> anyhow::Result<()> {
    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter().from_env_lossy())
        .with_writer(std::io::stderr)
        .init();

    command::run()
}

/// `info` unless `RUST_LOG` says otherwise.
fn log_filter() -> Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}
