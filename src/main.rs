mod cli;
mod config;
mod domain;
mod infra;
mod workflows;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use cli::{Action, Cli};
use domain::error::QueryError;
use infra::catalog::Catalog;
use workflows::{listing, lookup};

fn main() {
    config::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Keep argument errors to a single line like every other diagnostic.
            let rendered = e.render().to_string();
            println!("{}", rendered.lines().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        match e.downcast_ref::<QueryError>() {
            Some(query_error) => println!("{query_error}"),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("{}", usage());
        std::process::exit(1);
    };

    let catalog = Catalog::builtin().context("failed to build the episode catalog")?;

    match command.into_action()? {
        Action::Usage => println!("{}", usage()),
        Action::List => println!("{}", listing::render_table(&catalog)),
        Action::Lookup(query) => {
            let episode = lookup::find_episode(&catalog, &query)?;
            debug!(broadcast = episode.broadcast, "found episode");
            println!("{episode}");
        }
    }

    Ok(())
}

fn usage() -> String {
    Cli::command()
        .bin_name(config::PROGRAM_NAME)
        .render_long_help()
        .to_string()
}
