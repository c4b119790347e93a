//! Shared UI building blocks

pub mod form;
pub mod modal;

pub use form::{FormField, TextAreaField};
pub use modal::BaseModal;
