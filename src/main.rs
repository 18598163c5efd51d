#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! orgkeys: collect the public SSH keys of a GitHub organization's members.

mod cli;
mod github;
mod keys;
mod logging;

use clap::Parser;

use cli::{Cli, write_error, write_file, write_stdout};
use github::GithubClient;
use keys::{FetchError, KeyFetcher};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    match run(&cli).await {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}

/// Collect the keys and deliver them to the chosen destination.
async fn run(cli: &Cli) -> Result<(), FetchError> {
    let client = GithubClient::new(cli.token.clone())?;
    let fetcher = KeyFetcher::new(client);
    let keys = fetcher
        .collect_keys(&cli.organization, cli.team.as_deref())
        .await?;

    match &cli.file {
        Some(path) => write_file(&keys, path)?,
        None => write_stdout(&keys),
    }
    Ok(())
}
