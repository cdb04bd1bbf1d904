use clap::{Parser, Subcommand};

use crate::domain::error::QueryError;
use crate::domain::query::{Query, Scheme, TitleField};

#[derive(Parser, Debug)]
#[command(name = "ranma-episodes")]
#[command(about = "Ranma ½ episode search utility")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Find episode by Nettohen number
    #[command(visible_alias = "nh")]
    Nettohen {
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,
    },

    /// Find episode by broadcast order
    #[command(visible_alias = "bc")]
    Broadcast {
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,
    },

    /// Find episode by production order
    #[command(visible_alias = "prod")]
    Production {
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,
    },

    /// Find episode by Viz home release order
    Viz {
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,
    },

    /// Find episode by English name (fuzzy find)
    Name {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Find episode by Japanese (romaji) name (fuzzy find)
    Rjname {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// List episodes as tab-separated data
    Episodes,

    /// Display this message
    #[command(visible_alias = "usage")]
    Help,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// What a parsed command asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Usage,
    List,
    Lookup(Query),
}

impl Command {
    pub fn into_action(self) -> Result<Action, QueryError> {
        let query = match self {
            Command::Help => return Ok(Action::Usage),
            Command::Episodes => return Ok(Action::List),
            Command::Unknown(args) => {
                let name = args.into_iter().next().unwrap_or_default();
                return Err(QueryError::UnknownCommand(name));
            }
            Command::Nettohen { number } => Query::number(Scheme::Nettohen, number.as_deref())?,
            Command::Broadcast { number } => Query::number(Scheme::Broadcast, number.as_deref())?,
            Command::Production { number } => {
                Query::number(Scheme::Production, number.as_deref())?
            }
            Command::Viz { number } => Query::number(Scheme::Viz, number.as_deref())?,
            Command::Name { words } => Query::title(TitleField::English, &words)?,
            Command::Rjname { words } => Query::title(TitleField::Romaji, &words)?,
        };
        Ok(Action::Lookup(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Command> {
        let argv = std::iter::once("ranma-episodes").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    fn action(args: &[&str]) -> Result<Action, QueryError> {
        parse(args).unwrap().into_action()
    }

    #[test]
    fn test_aliases() {
        for (alias, name) in [
            ("nh", "nettohen"),
            ("bc", "broadcast"),
            ("prod", "production"),
        ] {
            assert_eq!(parse(&[alias, "12"]), parse(&[name, "12"]));
        }
        assert_eq!(parse(&["usage"]), Some(Command::Help));
        assert_eq!(parse(&["help"]), Some(Command::Help));
        assert_eq!(parse(&[]), None);
    }

    #[test]
    fn test_numeric_commands() {
        assert_eq!(
            action(&["nh", "1"]).unwrap(),
            Action::Lookup(Query::Number {
                scheme: Scheme::Nettohen,
                number: 1
            })
        );
        assert_eq!(
            action(&["viz", "-4"]).unwrap(),
            Action::Lookup(Query::Number {
                scheme: Scheme::Viz,
                number: -4
            })
        );
        assert!(matches!(
            action(&["prod", "abc"]),
            Err(QueryError::BadArgument { .. })
        ));
        assert!(matches!(
            action(&["broadcast"]),
            Err(QueryError::MissingArgument)
        ));
    }

    #[test]
    fn test_title_commands_join_words() {
        assert_eq!(
            action(&["name", "ranma", "and", "ranma"]).unwrap(),
            Action::Lookup(Query::Title {
                field: TitleField::English,
                text: "ranma and ranma".to_string()
            })
        );
        assert_eq!(
            action(&["rjname", "Ryōga no Puropōsu"]).unwrap(),
            Action::Lookup(Query::Title {
                field: TitleField::Romaji,
                text: "Ryōga no Puropōsu".to_string()
            })
        );
        assert!(matches!(
            action(&["rjname"]),
            Err(QueryError::MissingArgument)
        ));
    }

    #[test]
    fn test_listing_and_usage() {
        assert_eq!(action(&["episodes"]).unwrap(), Action::List);
        assert_eq!(action(&["usage"]).unwrap(), Action::Usage);
    }

    #[test]
    fn test_unknown_command() {
        let err = action(&["frobnicate", "1"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command frobnicate");
    }
}
