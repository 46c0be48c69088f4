// Service exports
pub mod postgres;
pub mod session;

pub use postgres::{PostgresClient, PostgresError};
pub use session::{SessionError, SessionKey, SessionStore};
