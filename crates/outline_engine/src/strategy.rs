use scraper::{ElementRef, Html, Selector};

/// Dedicated tag/class pair marking user messages.
pub const PRIMARY_SELECTOR: &str = "user-query, .user-query";
/// Generic message-identifier attribute scanned by the fallback query.
pub const FALLBACK_SELECTOR: &str = "[data-message-id]";
/// Boolean attribute flagging a fallback candidate as authored by the user.
pub const USER_AUTHORED_ATTR: &str = "data-is-user-message";

/// Primary/fallback query policy for user-message candidates.
///
/// The fallback runs only when the primary query matches nothing; the two
/// result sets are never merged, so a document commits to one convention per
/// pass. A selector that fails to parse degrades to zero matches.
pub struct SelectorStrategy {
    primary: Option<Selector>,
    fallback: Option<Selector>,
}

impl SelectorStrategy {
    pub fn new() -> Self {
        Self {
            primary: Selector::parse(PRIMARY_SELECTOR).ok(),
            fallback: Selector::parse(FALLBACK_SELECTOR).ok(),
        }
    }

    /// Candidate elements in document order.
    pub fn candidates<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        if let Some(sel) = self.primary.as_ref() {
            let primary: Vec<_> = doc.select(sel).collect();
            if !primary.is_empty() {
                return primary;
            }
        }
        let Some(sel) = self.fallback.as_ref() else {
            return Vec::new();
        };
        doc.select(sel)
            .filter(|el| el.value().attr(USER_AUTHORED_ATTR) == Some("true"))
            .collect()
    }
}

impl Default for SelectorStrategy {
    fn default() -> Self {
        Self::new()
    }
}
