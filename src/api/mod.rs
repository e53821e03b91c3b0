mod feed;
#[cfg(feature = "yew")]
mod http;

pub use feed::{FeedCursor, FeedError, PageMeta, PlayerGateway, PlayerPage};
#[cfg(feature = "yew")]
pub use http::HttpPlayerGateway;
