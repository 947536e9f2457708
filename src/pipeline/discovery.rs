//! Episode discovery from a show page
//!
//! Episode links are anchors carrying a fixed CSS-class marker. Document
//! order is significant: callers rely on it matching the episode sequence.

use scraper::{Html, Selector};

/// CSS selector marking elements that carry episode links on a show page
pub const EPISODE_LINK_MARKER: &str = ".medianet-content";

/// Extracts episode URLs from show page HTML in document order
///
/// Marker elements with a missing or empty `href` are silently skipped, not
/// an error. Never fails: a page with no markers yields an empty list, and
/// the caller decides whether that is fatal.
pub fn extract_episode_links(html: &str, marker: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse(marker) {
        Ok(s) => s,
        Err(_) => {
            tracing::warn!("Unparseable marker selector `{}`", marker);
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_links_in_document_order() {
        let html = r#"
            <html><body>
                <a class="medianet-content" href="/ep/1">Episode 1</a>
                <a class="medianet-content" href="/ep/2">Episode 2</a>
                <a class="medianet-content" href="/ep/3">Episode 3</a>
            </body></html>
        "#;
        let links = extract_episode_links(html, EPISODE_LINK_MARKER);
        assert_eq!(links, vec!["/ep/1", "/ep/2", "/ep/3"]);
    }

    #[test]
    fn test_skips_markers_without_href() {
        let html = r#"
            <html><body>
                <a class="medianet-content" href="/ep/1">Episode 1</a>
                <div class="medianet-content">No link here</div>
                <a class="medianet-content" href="/ep/2">Episode 2</a>
            </body></html>
        "#;
        let links = extract_episode_links(html, EPISODE_LINK_MARKER);
        assert_eq!(links, vec!["/ep/1", "/ep/2"]);
    }

    #[test]
    fn test_skips_empty_href() {
        let html = r#"
            <html><body>
                <a class="medianet-content" href="">Empty</a>
                <a class="medianet-content" href="/ep/1">Episode 1</a>
            </body></html>
        "#;
        let links = extract_episode_links(html, EPISODE_LINK_MARKER);
        assert_eq!(links, vec!["/ep/1"]);
    }

    #[test]
    fn test_ignores_unmarked_anchors() {
        let html = r#"
            <html><body>
                <a href="/about">About</a>
                <a class="nav-link" href="/home">Home</a>
                <a class="medianet-content" href="/ep/1">Episode 1</a>
            </body></html>
        "#;
        let links = extract_episode_links(html, EPISODE_LINK_MARKER);
        assert_eq!(links, vec!["/ep/1"]);
    }

    #[test]
    fn test_no_markers_yields_empty_list() {
        let html = "<html><body><p>Nothing to see</p></body></html>";
        assert!(extract_episode_links(html, EPISODE_LINK_MARKER).is_empty());
    }

    #[test]
    fn test_absolute_links_kept_verbatim() {
        let html = r#"
            <html><body>
                <a class="medianet-content" href="https://ici.example.ca/ep/1">Ep</a>
            </body></html>
        "#;
        let links = extract_episode_links(html, EPISODE_LINK_MARKER);
        assert_eq!(links, vec!["https://ici.example.ca/ep/1"]);
    }

    #[test]
    fn test_unparseable_marker_yields_empty_list() {
        let html = r#"<html><body><a class="x" href="/ep/1">Ep</a></body></html>"#;
        assert!(extract_episode_links(html, ":::not-a-selector").is_empty());
    }
}
