mod commands;
mod terminal;

use carte_common::config::Config;
use commands::{CommandLine, Commands, browse, review, session};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init()?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        currency: commands.currency,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Session) {
        Commands::Browse { selection, focus } => browse::browse(selection, focus, &cfg),
        Commands::Review { selection } => review::review(selection, &cfg),
        Commands::Session => session::session(&cfg),
    }
}
