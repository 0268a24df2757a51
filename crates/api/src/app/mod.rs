//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder structure:
//! - `services.rs`: startup wiring (fitted models, NLP capabilities)
//! - `routes/`: HTTP routes + handlers (one file per prediction area)
//! - `dto.rs`: request DTOs with permissive defaults

use std::sync::Arc;

use axum::{Extension, Router};

pub mod dto;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests). Fails only if a startup model cannot be fitted.
pub fn build_app(config: &crate::config::Config) -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services(config)?);
    Ok(routes::router().layer(Extension(services)))
}
