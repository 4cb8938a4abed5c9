pub mod browse;
pub mod review;
pub mod session;

use carte_common::menu::Course;
use carte_core::session::{Action, Session};
use clap::{Args, Parser, Subcommand};
use tracing::warn;

#[derive(Parser)]
#[command(name = "carte")]
#[command(about = "Browse the menu, pick your dishes, review your patron menu.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Less output; repeat to also hide dish descriptions
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Currency symbol printed before amounts
    #[arg(long, default_value = "R", global = true)]
    pub currency: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the menu grouped by course
    #[command(alias = "b")]
    Browse {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Course card to highlight
        #[arg(long, default_value = "starter")]
        focus: Course,
    },
    /// Show the patron menu for a selection
    #[command(alias = "r")]
    Review {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Pick dishes interactively (default)
    #[command(alias = "s")]
    Session,
}

#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Ids of the dishes to select, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Apply the chef's menu before the individual selections
    #[arg(short, long)]
    pub chefs_menu: bool,
}

impl SelectionArgs {
    /// Builds a house-menu session with this selection applied.
    pub fn into_session(self) -> Session {
        let mut session = Session::default();

        if self.chefs_menu {
            session.dispatch(Action::ToggleChefsMenu);
        }
        for id in self.select {
            let id = id.trim();
            if id.is_empty() {
                continue;
            }
            if session.store().item(id).is_none() {
                warn!("Dish '{id}' is not on the menu");
            }
            session.dispatch(Action::Toggle(id.into()));
        }

        session
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carte_common::menu::Price;

    #[test]
    fn parses_browse_selection() {
        let cli = CommandLine::try_parse_from(["carte", "browse", "--select", "1,3", "--focus", "dessert"])
            .expect("valid arguments");

        match cli.command {
            Some(Commands::Browse { selection, focus }) => {
                assert_eq!(selection.select, ["1", "3"]);
                assert!(!selection.chefs_menu);
                assert_eq!(focus, Course::Dessert);
            }
            _ => panic!("expected browse"),
        }
    }

    #[test]
    fn global_flags_and_aliases() {
        let cli = CommandLine::try_parse_from(["carte", "r", "-c", "-qq", "--currency", "$"])
            .expect("valid arguments");

        assert_eq!(cli.quiet, 2);
        assert_eq!(cli.currency, "$");
        assert!(matches!(
            cli.command,
            Some(Commands::Review { selection: SelectionArgs { chefs_menu: true, .. } })
        ));
    }

    #[test]
    fn rejects_unknown_course() {
        assert!(CommandLine::try_parse_from(["carte", "browse", "--focus", "soup"]).is_err());
    }

    #[test]
    fn selection_applies_chefs_menu_then_toggles() {
        let args = SelectionArgs {
            select: vec!["2".to_string(), " 3 ".to_string(), String::new()],
            chefs_menu: true,
        };

        let session = args.into_session();
        let store = session.store();

        assert!(session.chefs_menu().is_active());
        assert!(!store.is_selected("2"));
        assert!(store.is_selected("3"));
        assert_eq!(session.review().cart.total, Price::from_units(185 + 85 + 65));
    }
}
