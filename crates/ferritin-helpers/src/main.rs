use clap::Parser;
mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.init();
    cli.execute()?;
    Ok(())
}
