use std::num::ParseIntError;

use thiserror::Error;

use super::query::{Scheme, TitleField};

/// A literal catalog row that could not be turned into an [`Episode`](super::models::Episode).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid air date {date:?} for \"{title}\": {source}")]
    InvalidDate {
        title: String,
        date: String,
        source: chrono::ParseError,
    },

    #[error("invalid episode order {order:?} for \"{title}\": expected 1 to 3 slash-separated numbers")]
    InvalidOrder { title: String, order: String },

    #[error("invalid number {token:?} in episode order {order:?} for \"{title}\": {source}")]
    InvalidOrderNumber {
        title: String,
        order: String,
        token: String,
        source: ParseIntError,
    },

    #[error("nettohen number for \"{0}\" must be positive")]
    InvalidNettohen(String),

    #[error("broadcast episode {0} appears more than once")]
    DuplicateBroadcast(u32),

    #[error("nettohen episode {0} appears more than once")]
    DuplicateNettohen(u32),
}

/// Why a single invocation failed. Every variant renders as a one-line diagnostic.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("This command requires at least one argument")]
    MissingArgument,

    #[error("Bad argument {value:?}: {source}")]
    BadArgument {
        value: String,
        source: ParseIntError,
    },

    #[error("Can't find {scheme} episode {number}")]
    NumberNotFound { scheme: Scheme, number: i64 },

    #[error("Can't find episode {field} \"{query}\"")]
    TitleNotFound { field: TitleField, query: String },

    #[error("Unknown command {0}")]
    UnknownCommand(String),
}
