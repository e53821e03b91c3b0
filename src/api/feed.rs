use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::model::Player;

/// One page of the remote feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerPage {
    pub data: Vec<Player>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub next_cursor: Option<u64>,
    pub per_page: u32,
}

impl PlayerPage {
    /// A short page marks the end of the feed. `next_cursor` is present
    /// on the wire but not trusted as an end-of-data signal.
    pub fn is_last(&self) -> bool {
        (self.data.len() as u32) < self.meta.per_page
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("player request failed: {0}")]
    Request(String),
    #[error("player response unreadable: {0}")]
    Decode(String),
}

/// Read-only access to the paginated remote player source. Pages are
/// 1-indexed; a page number maps to the same slice of data as long as
/// the remote ordering is stable.
#[async_trait(?Send)]
pub trait PlayerGateway {
    async fn fetch_page(&self, page: u32) -> Result<PlayerPage, FeedError>;
}

/// Drives sequential page consumption: hands out page numbers 1..N in
/// order, with no gaps and no re-requests, and stops once a short page
/// arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCursor {
    page_size: u32,
    next_page: u32,
    has_more: bool,
}

impl FeedCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            next_page: 1,
            has_more: true,
        }
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The page to request next. Only meaningful while `has_more`.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Accounts for a fetched page of `fetched` players.
    pub fn record(&mut self, fetched: usize) {
        self.next_page += 1;
        if (fetched as u32) < self.page_size {
            self.has_more = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 25 players at page size 10 come back as 10, 10, 5.
    #[test]
    fn short_page_ends_the_feed() {
        let mut cursor = FeedCursor::new(10);

        assert_eq!(cursor.next_page(), 1);
        cursor.record(10);
        assert!(cursor.has_more());

        assert_eq!(cursor.next_page(), 2);
        cursor.record(10);
        assert!(cursor.has_more());

        assert_eq!(cursor.next_page(), 3);
        cursor.record(5);
        assert!(!cursor.has_more());
    }

    // An exact multiple of the page size needs one empty page to stop.
    #[test]
    fn full_last_page_keeps_the_feed_open() {
        let mut cursor = FeedCursor::new(10);
        cursor.record(10);
        assert!(cursor.has_more());

        cursor.record(0);
        assert!(!cursor.has_more());
    }

    #[test]
    fn page_numbers_are_sequential() {
        let mut cursor = FeedCursor::new(10);
        let mut requested = Vec::new();
        for fetched in [10, 10, 10, 4] {
            requested.push(cursor.next_page());
            cursor.record(fetched);
        }

        assert_eq!(requested, vec![1, 2, 3, 4]);
    }

    #[test]
    fn page_payload_knows_when_it_is_last() {
        let full: PlayerPage = serde_json::from_str(
            r#"{"data":[{"id":1,"first_name":"A","last_name":"B"},
                        {"id":2,"first_name":"C","last_name":"D"}],
                "meta":{"next_cursor":3,"per_page":2}}"#,
        )
        .expect("valid page JSON");
        assert!(!full.is_last());

        let short: PlayerPage = serde_json::from_str(
            r#"{"data":[{"id":3,"first_name":"E","last_name":"F"}],
                "meta":{"per_page":2}}"#,
        )
        .expect("valid page JSON");
        assert!(short.is_last());
        assert_eq!(short.meta.next_cursor, None);
    }
}
