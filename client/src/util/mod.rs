//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation rules, form schemas and user-facing copy are kept free of
//! browser and Leptos concerns so every form shares one definition.

pub mod messages;
pub mod schema;
pub mod validation;
