//! user-admin - user records with a complete audit trail
//!
//! This library provides the core of the user-admin application: a JSON
//! backed record store, a user service that logs every mutation, and the
//! validation rules applied to user input.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users and typed ids)
//! - `storage`: JSON file storage layer
//! - `services`: User service and input validation
//! - `audit`: Audit logging system
//! - `clock`: Injectable source of the current time
//! - `cli`, `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use user_admin::clock::SystemClock;
//! use user_admin::config::paths::AdminPaths;
//! use user_admin::services::UserService;
//! use user_admin::storage::Storage;
//!
//! let mut storage = Storage::new(AdminPaths::new()?)?;
//! storage.load_all()?;
//!
//! let service = UserService::new(&storage, &SystemClock);
//! let active = service.filter_by_active(true)?;
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::AdminError;
