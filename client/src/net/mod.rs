//! Network boundary for the authentication screen.
//!
//! ARCHITECTURE
//! ============
//! `handlers` owns the submission seam used by form controllers, `types` the
//! DTOs crossing it, and `api` the advisory REST calls made directly by
//! components.

pub mod api;
pub mod handlers;
pub mod types;
