//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each authentication form owns its `FormState` signal and a form controller;
//! notifications flow out through the shared `ToastState` context.

pub mod forgot_form;
pub mod form_field;
pub mod login_form;
pub mod mode_nav;
pub mod signup_form;
pub(crate) mod submit;
pub mod toast_stack;
