//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use service::domain::recipe;

/// Terminal client of the recipe book.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Page`] to open.
    #[command(subcommand)]
    pub page: Page,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Page of the recipe book.
#[derive(Clone, Debug, Subcommand)]
pub enum Page {
    /// Landing page with the featured recipes strip.
    Home,

    /// Log in and open the recipes catalog.
    Login {
        /// Name of the account.
        #[arg(short, long)]
        username: String,

        /// Password of the account.
        #[arg(short, long)]
        password: String,
    },

    /// Log out, forgetting the persisted session.
    Logout,

    /// Interactive recipes catalog.
    Recipes,

    /// Full details of a single recipe.
    Recipe {
        /// ID of the recipe.
        id: recipe::Id,
    },
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::{Args, Page};

    #[test]
    fn parses_pages() {
        let args =
            Args::try_parse_from(["recipe-book", "-c", "dev.toml", "recipe", "7"])
                .unwrap();

        assert_eq!(args.config, "dev.toml");
        assert!(matches!(args.page, Page::Recipe { id } if id == 7.into()));

        let args = Args::try_parse_from([
            "recipe-book",
            "login",
            "-u",
            "emilys",
            "-p",
            " secret ",
        ])
        .unwrap();

        assert_eq!(args.config, "config.toml");
        assert!(matches!(
            args.page,
            Page::Login { username, password }
                if username == "emilys" && password == " secret ",
        ));
    }
}
