//! Search query for reusable pull requests.

/// Field the search results are sorted by.
pub const SORT_FIELD: &str = "updated";

/// Most recently updated first.
pub const SORT_ASCENDING: bool = false;

/// Builds the issue search query matching open, unarchived pull requests
/// authored by `me` whose title contains `match_fragment`.
///
/// The fragment is passed through verbatim, including any search qualifiers
/// it may carry.
#[must_use]
pub fn search_query(me: &str, match_fragment: &str) -> String {
    format!("is:open is:pr archived:false in:title author:{me} {match_fragment}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_query_for_author_and_fragment() {
        assert_eq!(
            search_query("bot1", "Bump deps"),
            "is:open is:pr archived:false in:title author:bot1 Bump deps"
        );
    }

    #[test]
    fn forwards_fragment_unvalidated() {
        assert_eq!(
            search_query("bot1", "\"unterminated label:"),
            "is:open is:pr archived:false in:title author:bot1 \"unterminated label:"
        );
    }
}
