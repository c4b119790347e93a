//! UI components for the marketing site

pub mod common;
pub mod contact_form;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod scene;
pub mod theme;

pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
