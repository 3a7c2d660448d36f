//! Post-processing for `BRANCH~~ ... ~~` marker tokens
//!
//! Upstream generators flag a substring for highlighting by wrapping it in
//! a `BRANCH~~ ... ~~` delimiter pair. This pass runs after the ANSI
//! conversion and turns the pair into a yellow highlight span.

/// Token opening a highlighted region within a rendered line.
pub const MARKER_OPEN: &str = "BRANCH~~";
/// Token closing a highlighted region.
pub const MARKER_CLOSE: &str = "~~";

const HIGHLIGHT_OPEN: &str = "<span style=\"color: yellow;\">~";
const HIGHLIGHT_CLOSE: &str = "~</span>";

/// Converts marker tokens in converted HTML into highlight spans.
///
/// Operates per `<br/>`-separated line fragment and converts only the
/// first `BRANCH~~`/`~~` pair found in each fragment. A fragment carrying
/// several pairs keeps its later pairs as literal text; the upstream
/// convention guarantees at most one marker per line, and that scope is
/// part of the contract rather than something to widen silently.
pub fn highlight_branches(html: &str) -> String {
    html.split("<br/>")
        .map(|fragment| {
            fragment
                .replacen(MARKER_OPEN, HIGHLIGHT_OPEN, 1)
                .replacen(MARKER_CLOSE, HIGHLIGHT_CLOSE, 1)
        })
        .collect::<Vec<_>>()
        .join("<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pair_becomes_highlight_span() {
        assert_eq!(
            highlight_branches("BRANCH~~foo~~"),
            "<span style=\"color: yellow;\">~foo~</span>"
        );
    }

    #[test]
    fn only_first_pair_per_fragment_converts() {
        assert_eq!(
            highlight_branches("BRANCH~~a~~ BRANCH~~b~~"),
            "<span style=\"color: yellow;\">~a~</span> BRANCH~~b~~"
        );
    }

    #[test]
    fn fragments_are_processed_independently() {
        assert_eq!(
            highlight_branches("BRANCH~~a~~<br/>BRANCH~~b~~"),
            "<span style=\"color: yellow;\">~a~</span><br/><span style=\"color: yellow;\">~b~</span>"
        );
    }

    #[test]
    fn text_without_markers_is_unchanged() {
        assert_eq!(highlight_branches("plain<br/>text"), "plain<br/>text");
        assert_eq!(highlight_branches(""), "");
    }

    #[test]
    fn surrounding_text_survives() {
        assert_eq!(
            highlight_branches("commit on BRANCH~~main~~ at noon"),
            "commit on <span style=\"color: yellow;\">~main~</span> at noon"
        );
    }
}
