pub mod config;
pub mod entry;
pub mod ids;
pub mod parse_input;
pub mod paths;
pub mod store;
pub mod timeline;
pub mod timestamps;

pub use config::Config;
pub use entry::Entry;
pub use store::{LoadResult, Store, StoreError};
pub use timeline::{
    ClearOutcome, CreateOutcome, DeleteOutcome, Filter, Timeline, UpdateOutcome,
};
