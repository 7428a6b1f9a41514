pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

pub use db::TodoStore;
pub use error::ApiError;
pub use router::build_router;
