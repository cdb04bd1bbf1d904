pub mod catalog;
mod episodes;
