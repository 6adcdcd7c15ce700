use clap::Parser;
use tradecycle::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
