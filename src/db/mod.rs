pub mod connection;
pub mod drafts;

pub use connection::Database;
