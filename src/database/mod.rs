pub mod connection;
pub mod matches;
pub mod setup;
pub mod teams;

pub use connection::{DbConn, DbPool, create_memory_pool, create_pool, get_connection};
