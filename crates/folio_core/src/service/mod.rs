//! Core use-case services.
//!
//! # Responsibility
//! - Tie catalog mutations to full re-render and surface commit.
//! - Keep CLI callers decoupled from rendering and display details.

pub mod portfolio_service;
