use clap::Parser;
use handrank::cli::Cli;

fn main() -> anyhow::Result<()> {
    handrank::log();
    Cli::parse().run()
}
