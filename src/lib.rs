pub mod config;
pub mod handlers;
pub mod schema;
pub mod seed;
pub mod server;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, ServerConfig};
pub use schema::{build_schema, PostSchema};
pub use server::{build_router, run_server, ServerError};
pub use store::{MemoryStore, MongoStore, PostDocument, PostStore, SharedStore, StoreError};
