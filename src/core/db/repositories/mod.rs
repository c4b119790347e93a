//! Database repositories

pub mod contact;

pub use contact::{ContactRepository, ContactRepositoryError, ContactStore};
