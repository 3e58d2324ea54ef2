//! Home page - search box, trending searches and results

use axum::extract::State;
use axum::response::Html;

use crate::components::{hero_header, results_section, search_input, trending_section};
use crate::server::AppState;

/// Renders the home page and opens a fresh search session for it.
///
/// The page subscribes to the session's view stream, which replaces the
/// trending and results sections whenever the view changes.
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    let session = state
        .sessions
        .open(state.discovery.clone(), state.search.debounce);
    let session_id = session.id().to_string();
    let view = session.snapshot();
    let image_base_url = state.discovery.image_base_url();

    tracing::debug!(%session_id, "Opened search session for page");

    let content = format!(
        r#"{}
        {}
        <div hx-ext="sse" sse-connect="/sse/search/{session_id}">
            <div id="trending" sse-swap="trending">{}</div>
            <div id="results" sse-swap="results">{}</div>
        </div>"#,
        hero_header(),
        search_input(&session_id, &view.search_term),
        trending_section(&view.trending),
        results_section(&view, image_base_url),
    );

    render_page("Home", &content)
}

/// Wraps page content in the shared document shell.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10/dist/ext/sse.js"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    400: '#c4b5fd',
                                    500: '#a78bfa',
                                    600: '#8b5cf6'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            <main class="max-w-7xl mx-auto px-4 py-10">
                {content}
            </main>
        </body>
        </html>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_loads_htmx_extensions() {
        let Html(html) = render_page("Home", "<p>hello</p>");
        assert!(html.contains("<title>Home - Marquee</title>"));
        assert!(html.contains("dist/ext/sse.js"));
        assert!(html.contains("<p>hello</p>"));
    }
}
