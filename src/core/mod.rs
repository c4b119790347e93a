//! Core domain logic: contact submissions, configuration and persistence

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
#[cfg(feature = "ssr")]
pub mod db;
