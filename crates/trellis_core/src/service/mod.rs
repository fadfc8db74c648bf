//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep derived-field recomputation riding along with the mutations
//!   that invalidate it.

pub mod workspace;
