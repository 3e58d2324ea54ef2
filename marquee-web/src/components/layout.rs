//! Layout components - header, search box, containers

/// Escapes text for use in HTML bodies and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the hero banner shown above the search box.
pub fn hero_header() -> String {
    r#"<header class="text-center mb-10">
            <h1 class="text-4xl md:text-5xl font-bold text-white leading-tight">
                Find <span class="text-marquee-400">Movies</span> You'll Enjoy Without the Hassle
            </h1>
        </header>"#
        .to_string()
}

/// Renders the search box bound to a session.
///
/// Every input event posts the current value to the session's keystroke
/// endpoint. Nothing is swapped in response; the page updates from the
/// view stream instead.
pub fn search_input(session_id: &str, value: &str) -> String {
    let value = escape(value);
    format!(
        r#"<div class="max-w-2xl mx-auto mb-10">
            <input type="text" name="query" value="{value}" autocomplete="off"
                   placeholder="Search through thousands of movies"
                   class="w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-marquee-500 focus:border-transparent"
                   hx-post="/htmx/search/{session_id}" hx-trigger="input" hx-swap="none" />
        </div>"#
    )
}

/// Renders a grid container for responsive layouts.
///
/// Use Tailwind grid column classes like "grid-cols-2 md:grid-cols-4".
pub fn grid(columns: &str, content: &str) -> String {
    format!(r#"<div class="grid {columns} gap-6">{content}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("Dune"), "Dune");
    }

    #[test]
    fn test_search_input_targets_session() {
        let html = search_input("abc", r#"star "wars""#);
        assert!(html.contains(r#"hx-post="/htmx/search/abc""#));
        assert!(html.contains(r#"name="query""#));
        assert!(html.contains("star &quot;wars&quot;"));
    }
}
