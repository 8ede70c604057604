//! Client-side state for the authentication screen.
//!
//! ARCHITECTURE
//! ============
//! Plain Rust types with no Leptos dependency so they can be unit tested
//! natively. Components wrap them in signals.

pub mod availability;
pub mod controller;
pub mod form;
pub mod mode;
pub mod toast;
