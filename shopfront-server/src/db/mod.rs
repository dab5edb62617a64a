//! Database layer - connection pool, store trait and implementations

pub mod error;
pub mod mock;
pub mod pool;
pub mod store;

pub use error::{DbError, ErrorPayload};
pub use mock::{MockStore, StoreOp};
pub use pool::create_pool;
pub use store::{MySqlStore, Store};
