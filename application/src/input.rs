//! [`Input`] of the interactive catalog.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use service::{domain::recipe, read::recipe::list::CuisineSelection};

/// Line of input typed into the interactive catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// Searches recipes by the provided text.
    Search(String),

    /// Selects the cuisine to browse.
    Cuisine(CuisineSelection),

    /// Lists the cuisines to select from.
    Cuisines,

    /// Renders the next page of recipes.
    More,

    /// Opens full details of the recipe.
    View(recipe::Id),

    /// Closes the opened recipe details.
    Close,

    /// Logs out.
    Logout,

    /// Leaves the catalog.
    Quit,
}

/// Usage of the interactive catalog.
pub const USAGE: &str = "\
Commands:
  search <text>       search recipes (empty text clears the search)
  cuisine <name|ALL>  browse a single cuisine or all of them
  cuisines            list cuisines
  more                show more recipes
  view <id>           open full recipe
  close               close full recipe
  logout              log out
  quit                leave";

/// Line of input, with its first word naming the [`Command`].
#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    /// Typed command.
    #[command(subcommand)]
    command: Command,
}

/// Command of the interactive catalog.
#[derive(Debug, Subcommand)]
enum Command {
    /// Search recipes (empty text clears the search).
    Search {
        /// Words to search for.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Browse a single cuisine, or all of them with `ALL`.
    Cuisine {
        /// Words of the cuisine name.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// List cuisines.
    Cuisines,

    /// Show more recipes.
    More,

    /// Open full recipe.
    View {
        /// ID of the recipe.
        id: recipe::Id,
    },

    /// Close full recipe.
    Close,

    /// Log out.
    Logout,

    /// Leave.
    #[command(alias = "exit")]
    Quit,
}

impl From<Command> for Input {
    fn from(value: Command) -> Self {
        match value {
            Command::Search { text } => Self::Search(text.join(" ")),
            Command::Cuisine { name } => {
                Self::Cuisine(match name.join(" ").parse() {
                    Ok(cuisine) => cuisine,
                    Err(never) => match never {},
                })
            }
            Command::Cuisines => Self::Cuisines,
            Command::More => Self::More,
            Command::View { id } => Self::View(id),
            Command::Close => Self::Close,
            Command::Logout => Self::Logout,
            Command::Quit => Self::Quit,
        }
    }
}

impl FromStr for Input {
    type Err = clap::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Line::try_parse_from(s.split_whitespace())
            .map(|line| line.command.into())
    }
}

#[cfg(test)]
mod spec {
    use clap::error::ErrorKind;
    use service::read::recipe::list::CuisineSelection;

    use super::Input;

    fn parse(line: &str) -> Input {
        line.parse()
            .unwrap_or_else(|e| panic!("failed to parse `{line}`: {e}"))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse("search  chicken curry "),
            Input::Search("chicken curry".to_owned()),
        );
        assert_eq!(parse("search"), Input::Search(String::new()));
        assert_eq!(
            parse("cuisine Italian"),
            Input::Cuisine(CuisineSelection::Only("Italian".into())),
        );
        assert_eq!(
            parse("cuisine Middle Eastern"),
            Input::Cuisine(CuisineSelection::Only("Middle Eastern".into())),
        );
        assert_eq!(parse("cuisine ALL"), Input::Cuisine(CuisineSelection::All));
        assert_eq!(parse("cuisines"), Input::Cuisines);
        assert_eq!(parse("more"), Input::More);
        assert_eq!(parse("view 12"), Input::View(12.into()));
        assert_eq!(parse("close"), Input::Close);
        assert_eq!(parse("logout"), Input::Logout);
        assert_eq!(parse(" quit "), Input::Quit);
        assert_eq!(parse("exit"), Input::Quit);
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(parse("search\tpizza"), Input::Search("pizza".to_owned()));
        assert_eq!(parse("view\t 5"), Input::View(5.into()));
        assert_eq!(parse("\tmore\t"), Input::More);
    }

    #[test]
    fn rejects_malformed_commands() {
        let err = "view pizza".parse::<Input>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = "view".parse::<Input>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        assert!("cook".parse::<Input>().is_err());
    }
}
