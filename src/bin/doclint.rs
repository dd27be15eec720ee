use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use doc_comment_lint::config::{Args, Config};
use doc_comment_lint::runner;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    let config = Config::from_args(args)?;

    if runner::run(config).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
