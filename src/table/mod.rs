//! Table coordination: the session coordinator, its configuration, the
//! full-state snapshot, and the store-backed session wrapper.

pub mod config;
pub mod coordinator;
pub mod session;
pub mod snapshot;

pub use config::TableConfig;
pub use coordinator::Table;
pub use session::TableSession;
pub use snapshot::TableSnapshot;
