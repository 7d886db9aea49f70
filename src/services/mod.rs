// Service exports
pub mod auth;
pub mod cache;
pub mod memory;
pub mod postgres;

pub use auth::{hash_password, verify_password, AuthError, Claims, TokenService};
pub use cache::CachedStore;
pub use memory::MemoryStore;
pub use postgres::{DatabaseError, PostgresClient};
