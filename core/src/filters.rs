// Keyword filters for media file paths
//
// Library managers gate marker detection per path with two
// comma-separated keyword lists: one that a path must match and one
// that it must not. Keywords are matched verbatim as substrings, with
// no trimming and no case folding.

/// Outcome of a keyword filter, carrying the keyword that decided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Whether the path passed the filter
    pub allowed: bool,
    /// For an inclusion pass: the first matching keyword.
    /// For an exclusion reject: the offending keyword.
    pub keyword: Option<String>,
}

/// Pass when ANY keyword is a substring of the path
///
/// Splitting keeps empty segments, so an empty `keywords` string
/// yields the single empty keyword, which matches every path.
pub fn include_keyword(path: &str, keywords: &str) -> FilterResult {
    for keyword in keywords.split(',') {
        if path.contains(keyword) {
            return FilterResult {
                allowed: true,
                keyword: Some(keyword.to_string()),
            };
        }
    }
    FilterResult {
        allowed: false,
        keyword: None,
    }
}

/// Pass when NO keyword is a substring of the path
///
/// An empty `keywords` string means no exclusions at all, so every
/// path passes. Asymmetric with [`include_keyword`] on purpose.
pub fn exclude_keyword(path: &str, keywords: &str) -> FilterResult {
    if keywords.is_empty() {
        return FilterResult {
            allowed: true,
            keyword: None,
        };
    }
    for keyword in keywords.split(',') {
        if path.contains(keyword) {
            return FilterResult {
                allowed: false,
                keyword: Some(keyword.to_string()),
            };
        }
    }
    FilterResult {
        allowed: true,
        keyword: None,
    }
}
