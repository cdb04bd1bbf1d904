use crate::domain::models::Episode;
use crate::domain::query::Query;

pub trait Matcher {
    fn matches(&self, episode: &Episode) -> bool;
}

/// The matchers that answer `query`, strictest first.
///
/// A lookup takes the first catalog hit of the earliest matcher that has one.
pub fn for_query(query: &Query) -> Vec<Box<dyn Matcher>> {
    let mut matchers: Vec<Box<dyn Matcher>> = Vec::new();
    match query {
        Query::Number { scheme, number } => matchers.push(Box::new(number::NumberMatcher {
            scheme: *scheme,
            number: *number,
        })),
        Query::Title { field, text } => {
            let exact = title::TitleMatcher::exact(*field, text);
            // An empty prefix would match every title.
            let with_prefix = exact.has_comparable_text();
            matchers.push(Box::new(exact));
            if with_prefix {
                matchers.push(Box::new(title::TitleMatcher::prefix(*field, text)));
            }
        }
    }
    matchers
}

pub mod number;
pub mod title;
