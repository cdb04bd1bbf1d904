use std::fmt;

use super::error::QueryError;
use super::models::Episode;

/// The numbering conventions an episode can be looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Nettohen,
    Broadcast,
    Production,
    Viz,
}

impl Scheme {
    /// The episode's number under this scheme, if it has one.
    pub fn number_of(self, episode: &Episode) -> Option<u32> {
        match self {
            Scheme::Nettohen => episode.nettohen,
            Scheme::Broadcast => Some(episode.broadcast),
            Scheme::Production => Some(episode.production),
            Scheme::Viz => Some(episode.viz),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scheme::Nettohen => "Nettohen",
            Scheme::Broadcast => "broadcast",
            Scheme::Production => "production",
            Scheme::Viz => "Viz",
        })
    }
}

/// Which title a fuzzy name lookup compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleField {
    English,
    Romaji,
}

impl TitleField {
    pub fn title_of(self, episode: &Episode) -> &str {
        match self {
            TitleField::English => &episode.title,
            TitleField::Romaji => &episode.romaji_title,
        }
    }
}

impl fmt::Display for TitleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TitleField::English => "name",
            TitleField::Romaji => "romaji name",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Number { scheme: Scheme, number: i64 },
    Title { field: TitleField, text: String },
}

impl Query {
    /// Builds a numeric query from a raw command-line argument.
    pub fn number(scheme: Scheme, arg: Option<&str>) -> Result<Self, QueryError> {
        let arg = arg.ok_or(QueryError::MissingArgument)?;
        let number = arg
            .parse::<i64>()
            .map_err(|source| QueryError::BadArgument {
                value: arg.to_string(),
                source,
            })?;
        Ok(Query::Number { scheme, number })
    }

    /// Builds a title query from the remaining words of the command line.
    pub fn title(field: TitleField, words: &[String]) -> Result<Self, QueryError> {
        if words.is_empty() {
            return Err(QueryError::MissingArgument);
        }
        Ok(Query::Title {
            field,
            text: words.join(" "),
        })
    }

    /// The error reported when nothing in the catalog satisfies this query.
    pub fn not_found(&self) -> QueryError {
        match self {
            Query::Number { scheme, number } => QueryError::NumberNotFound {
                scheme: *scheme,
                number: *number,
            },
            Query::Title { field, text } => QueryError::TitleNotFound {
                field: *field,
                query: text.clone(),
            },
        }
    }
}
