//! MongoDB persistence adapters.
//!
//! The adapter stores users as BSON documents keyed by `ObjectId`. Document
//! shapes (`documents.rs`) and driver error classification are internal
//! details never exposed to the domain.
//!
//! # Example
//!
//! ```ignore
//! use accounts::outbound::persistence::{MongoConfig, MongoUserRepository};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017", "accounts", "users");
//! let repo = MongoUserRepository::connect(&config).await?;
//! ```

mod documents;
mod mongo_error_mapping;
mod mongo_user_repository;

pub use mongo_user_repository::{MongoConfig, MongoUserRepository};
