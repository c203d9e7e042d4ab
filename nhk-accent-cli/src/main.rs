//! nhk-accent command-line entry point

use clap::Parser;
use nhk_accent_cli::commands::Commands;

/// NHK pitch-accent dictionary tool
#[derive(Debug, Parser)]
#[command(name = "nhk-accent", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_lookup() {
        let cli = Cli::try_parse_from(["nhk-accent", "lookup", "雨", "-r", "あめ"]).unwrap();
        assert!(matches!(cli.command, Commands::Lookup(_)));
    }
}
