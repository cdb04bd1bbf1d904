use std::fmt::Write;

use crate::domain::models::Episode;
use crate::infra::catalog::Catalog;

pub const HEADER: [&str; 8] = [
    "Nettohen No.",
    "Broadcast No.",
    "Viz No.",
    "Production No.",
    "EN Title",
    "JP Title (romaji)",
    "JP Title",
    "Broadcast Date (YYYY-MM-DD)",
];

/// Renders the whole catalog as tab-separated rows under a header row.
pub fn render_table(catalog: &Catalog) -> String {
    let mut table = HEADER.join("\t");
    for episode in catalog.episodes() {
        table.push('\n');
        push_row(&mut table, episode);
    }
    table
}

fn push_row(table: &mut String, episode: &Episode) {
    // Writing into a String cannot fail.
    let _ = write!(
        table,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        episode.nettohen_column(),
        episode.broadcast,
        episode.viz,
        episode.production,
        episode.title,
        episode.romaji_title,
        episode.japanese_title,
        episode.aired_display()
    );
}
