//! Core use-case services.
//!
//! # Responsibility
//! - Expose checklist store operations as use-case level APIs.
//! - Keep HTTP layers decoupled from storage details.

pub mod checklist_service;
