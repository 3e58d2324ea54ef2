//! Trending searches component

use marquee_search::TrendingRecord;

use super::layout::escape;

/// Renders the ranked trending searches, or nothing when there are none.
pub fn trending_section(records: &[TrendingRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let items: String = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let term = escape(&record.search_term);
            let poster_html = if record.poster.is_empty() {
                r#"<div class="w-24 h-36 rounded-lg bg-gray-700"></div>"#.to_string()
            } else {
                format!(
                    r#"<img src="{}" alt="{term}" class="w-24 h-36 object-cover rounded-lg" />"#,
                    escape(&record.poster)
                )
            };

            format!(
                r#"<li class="flex items-center space-x-3" title="{term}">
                    <span class="text-6xl font-bold text-gray-600">{}</span>
                    {poster_html}
                </li>"#,
                index + 1
            )
        })
        .collect();

    format!(
        r#"<section class="trending mb-10">
            <h2 class="text-2xl font-semibold text-white mb-4">Trending Movies</h2>
            <ul class="flex space-x-6 overflow-x-auto">{items}</ul>
        </section>"#
    )
}
