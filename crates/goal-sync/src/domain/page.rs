//! Collection Pages
//!
//! The backend answers list requests either with a bare array (legacy) or with a paginated
//! envelope. [`RawPage::normalize`] is the only place that tells the two apart.

use serde::{Deserialize, Serialize};

/// One normalized page of items plus pagination metadata.
///
/// Invariants: `page >= 1`, `total_pages >= 1`, `has_next_page == (page < total_pages)`,
/// `has_prev_page == (page > 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> CollectionPage<T> {
    /// A single page holding every item.
    pub fn single(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            page: 1,
            total_pages: 1,
            total,
            has_next_page: false,
            has_prev_page: false,
        }
    }

    /// Build a page, deriving the has-next/has-prev flags from `page` and `total_pages`.
    pub fn new(items: Vec<T>, page: u32, total_pages: u32, total: u64) -> Self {
        let page = page.max(1);
        let total_pages = total_pages.max(1);
        Self {
            items,
            page,
            total_pages,
            total,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

impl<T> Default for CollectionPage<T> {
    fn default() -> Self {
        Self::single(Vec::new())
    }
}

/// Paginated envelope as sent by newer endpoints.
///
/// The item list key differs per resource, hence the aliases.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(
        alias = "goals",
        alias = "groupGoals",
        alias = "entries",
        alias = "progressEntries",
        alias = "data"
    )]
    pub items: Vec<T>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
    #[serde(default)]
    pub has_prev_page: Option<bool>,
}

/// Either response shape, straight off the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPage<T> {
    Flat(Vec<T>),
    Envelope(Envelope<T>),
}

impl<T> RawPage<T> {
    /// Convert either shape into a [`CollectionPage`].
    ///
    /// `requested_page` and `page_size` fill in metadata an envelope leaves out.
    pub fn normalize(self, requested_page: u32, page_size: u32) -> CollectionPage<T> {
        match self {
            RawPage::Flat(items) => CollectionPage::single(items),
            RawPage::Envelope(envelope) => {
                let page = envelope.page.unwrap_or(requested_page).max(1);
                let total = envelope.total.unwrap_or(envelope.items.len() as u64);
                let total_pages = match (envelope.total_pages, envelope.has_next_page) {
                    (Some(total_pages), _) => total_pages,
                    (None, Some(true)) => page + 1,
                    (None, Some(false)) => page,
                    (None, None) => pages_for(total, page_size),
                };
                CollectionPage::new(envelope.items, page, total_pages, total)
            }
        }
    }
}

fn pages_for(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn envelope_under_goals_key() {
        let raw: RawPage<u32> = serde_json::from_str(
            r#"{"goals":[1,2,3],"page":1,"totalPages":3,"total":25,
                "hasNextPage":true,"hasPrevPage":false}"#,
        )
        .unwrap();
        let page = raw.normalize(1, 10);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, 25);
        assert!(page.has_next_page);
        assert!(!page.has_prev_page);
    }

    #[test]
    fn envelope_flags_follow_page_position() {
        // A server flag that disagrees with page/totalPages loses.
        let raw: RawPage<u32> = serde_json::from_str(
            r#"{"items":[],"page":3,"totalPages":3,"hasNextPage":true}"#,
        )
        .unwrap();
        let page = raw.normalize(3, 10);
        assert!(!page.has_next_page);
        assert!(page.has_prev_page);
    }

    #[test]
    fn envelope_missing_metadata_is_derived() {
        let raw: RawPage<u32> =
            serde_json::from_str(r#"{"groupGoals":[1,2],"total":23}"#).unwrap();
        let page = raw.normalize(2, 10);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page);
        assert!(page.has_prev_page);
    }

    #[test]
    fn envelope_with_only_has_next_flag() {
        let raw: RawPage<u32> =
            serde_json::from_str(r#"{"entries":[1],"page":4,"hasNextPage":true}"#).unwrap();
        let page = raw.normalize(4, 1);
        assert_eq!(page.total_pages, 5);
        assert!(page.has_next_page);
    }

    #[test]
    fn zero_page_is_clamped() {
        let raw: RawPage<u32> =
            serde_json::from_str(r#"{"data":[],"page":0,"totalPages":0}"#).unwrap();
        let page = raw.normalize(1, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page);
    }

    proptest! {
        #[test]
        fn flat_arrays_are_a_single_page(items in prop::collection::vec(any::<u32>(), 0..64),
                                         requested in 1u32..20, size in 0u32..50) {
            let json = serde_json::to_string(&items).unwrap();
            let raw: RawPage<u32> = serde_json::from_str(&json).unwrap();
            let page = raw.normalize(requested, size);
            prop_assert_eq!(page.page, 1);
            prop_assert_eq!(page.total_pages, 1);
            prop_assert_eq!(page.total, items.len() as u64);
            prop_assert!(!page.has_next_page);
            prop_assert!(!page.has_prev_page);
            prop_assert_eq!(page.items, items);
        }

        #[test]
        fn normalized_envelopes_keep_the_invariants(page in 0u32..10, total_pages in 0u32..10) {
            let json = format!(r#"{{"items":[],"page":{page},"totalPages":{total_pages}}}"#);
            let raw: RawPage<u32> = serde_json::from_str(&json).unwrap();
            let page = raw.normalize(1, 10);
            prop_assert!(page.page >= 1);
            prop_assert!(page.total_pages >= 1);
            prop_assert_eq!(page.has_next_page, page.page < page.total_pages);
            prop_assert_eq!(page.has_prev_page, page.page > 1);
        }
    }
}
