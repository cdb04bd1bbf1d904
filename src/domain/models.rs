use std::fmt;

use chrono::NaiveDate;

use super::error::CatalogError;
use crate::config::{AIR_DATE_FORMAT, DISPLAY_DATE_FORMAT};

/// How a literal row numbers its episode.
#[derive(Debug, Clone, Copy)]
pub enum Numbering {
    /// Episodes that aired before the Nettohen continuity existed. Viz
    /// follows broadcast order for these.
    Original { broadcast: u32, production: u32 },
    /// `order` is `B`, `B/P` or `B/V/P`.
    Nettohen { number: u32, order: &'static str },
}

/// One literal row of the embedded episode table.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeRecord {
    pub numbering: Numbering,
    pub title: &'static str,
    pub romaji_title: &'static str,
    pub japanese_title: &'static str,
    pub aired: &'static str,
}

impl EpisodeRecord {
    pub const fn original(
        broadcast: u32,
        production: u32,
        title: &'static str,
        romaji_title: &'static str,
        japanese_title: &'static str,
        aired: &'static str,
    ) -> Self {
        Self {
            numbering: Numbering::Original {
                broadcast,
                production,
            },
            title,
            romaji_title,
            japanese_title,
            aired,
        }
    }

    pub const fn nettohen(
        number: u32,
        order: &'static str,
        title: &'static str,
        romaji_title: &'static str,
        japanese_title: &'static str,
        aired: &'static str,
    ) -> Self {
        Self {
            numbering: Numbering::Nettohen { number, order },
            title,
            romaji_title,
            japanese_title,
            aired,
        }
    }
}

/// Broadcast, Viz and production positions of a single episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeOrder {
    pub broadcast: u32,
    pub viz: u32,
    pub production: u32,
}

impl EpisodeOrder {
    /// Parses the compact `B`, `B/P` or `B/V/P` form.
    ///
    /// A single number fills all three positions; with two numbers Viz
    /// follows production.
    pub fn parse(order: &str, title: &str) -> Result<Self, CatalogError> {
        let numbers = order
            .split('/')
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|source| CatalogError::InvalidOrderNumber {
                        title: title.to_string(),
                        order: order.to_string(),
                        token: token.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match numbers[..] {
            [number] => Ok(Self {
                broadcast: number,
                viz: number,
                production: number,
            }),
            [broadcast, production] => Ok(Self {
                broadcast,
                viz: production,
                production,
            }),
            [broadcast, viz, production] => Ok(Self {
                broadcast,
                viz,
                production,
            }),
            _ => Err(CatalogError::InvalidOrder {
                title: title.to_string(),
                order: order.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// `None` for episodes that predate the Nettohen numbering.
    pub nettohen: Option<u32>,
    pub broadcast: u32,
    pub viz: u32,
    pub production: u32,
    pub title: String,
    pub romaji_title: String,
    pub japanese_title: String,
    pub aired: NaiveDate,
}

impl Episode {
    /// Written in place of a missing Nettohen number in tabular output.
    pub const NO_NETTOHEN: i64 = -1;

    pub fn from_record(record: &EpisodeRecord) -> Result<Self, CatalogError> {
        let (nettohen, order) = match record.numbering {
            Numbering::Original {
                broadcast,
                production,
            } => (
                None,
                EpisodeOrder {
                    broadcast,
                    viz: broadcast,
                    production,
                },
            ),
            Numbering::Nettohen { number, order } => {
                if number == 0 {
                    return Err(CatalogError::InvalidNettohen(record.title.to_string()));
                }
                (Some(number), EpisodeOrder::parse(order, record.title)?)
            }
        };

        Ok(Self {
            nettohen,
            broadcast: order.broadcast,
            viz: order.viz,
            production: order.production,
            title: record.title.to_string(),
            romaji_title: record.romaji_title.to_string(),
            japanese_title: record.japanese_title.to_string(),
            aired: parse_air_date(record.aired, record.title)?,
        })
    }

    /// The Nettohen number as written in tabular output.
    pub fn nettohen_column(&self) -> i64 {
        self.nettohen.map_or(Self::NO_NETTOHEN, i64::from)
    }

    pub fn aired_display(&self) -> impl fmt::Display + '_ {
        self.aired.format(DISPLAY_DATE_FORMAT)
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nettohen {
            Some(nettohen) => writeln!(
                f,
                "Nettohen Episode {}, Broadcast Episode {}, Viz Episode {}, Production Episode {}",
                nettohen, self.broadcast, self.viz, self.production
            )?,
            None => writeln!(
                f,
                "Broadcast Episode {}, Production Episode {}",
                self.broadcast, self.production
            )?,
        }
        writeln!(f, "English title: {}", self.title)?;
        writeln!(
            f,
            "Japanese title: {} ({})",
            self.japanese_title, self.romaji_title
        )?;
        write!(f, "First aired {}", self.aired_display())
    }
}

fn parse_air_date(date: &str, title: &str) -> Result<NaiveDate, CatalogError> {
    NaiveDate::parse_from_str(date, AIR_DATE_FORMAT).map_err(|source| {
        CatalogError::InvalidDate {
            title: title.to_string(),
            date: date.to_string(),
            source,
        }
    })
}
