//! Thincat CLI: the `thincat` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(cli.verbose);

    match cli.command {
        Commands::Closure {
            category,
            verify,
            json,
        } => commands::closure::run(category, verify, json),

        Commands::Arrow {
            category,
            from,
            to,
            json,
        } => commands::arrow::run(category, from, to, json),

        Commands::Functors {
            source,
            target,
            count,
            json,
        } => commands::functors::run(source, target, count, json),

        Commands::Transform {
            source,
            target,
            json,
        } => commands::transform::run(source, target, json),
    }
}
