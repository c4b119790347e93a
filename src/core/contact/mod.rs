//! Contact submission domain: shared validation, email notification and API

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod email;
pub mod validation;
