pub mod api;
#[cfg(feature = "yew")]
pub mod components;
pub mod config;
pub mod model;
pub mod repository;
pub mod storage;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::api::HttpPlayerGateway;
    pub use crate::api::{FeedCursor, FeedError, PageMeta, PlayerGateway, PlayerPage};
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    pub use crate::model::validate_team_choice;
    pub use crate::model::validate_team_name;
    pub use crate::model::validate_username;
    pub use crate::model::Player;
    pub use crate::model::Team;
    pub use crate::model::TeamError;
    pub use crate::model::ValidationError;
    pub use crate::repository::SessionStore;
    pub use crate::repository::TeamRepository;
    #[cfg(feature = "yew")]
    pub use crate::storage::BrowserStore;
    pub use crate::storage::KeyValueStore;
    pub use crate::storage::MemoryStore;
    pub use crate::storage::StorageError;
}
