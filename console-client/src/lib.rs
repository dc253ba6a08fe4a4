//! console-client: Embeddable shell core for the panel's web console.
//!
//! Owns the session lifecycle (credential + profile, mirrored to
//! persistent storage) and the per-navigation admission check. The hosting
//! UI supplies the navigation events and renders whatever the guard
//! decides; HTTP calls to the panel API go through the `Authenticator`
//! seam.
pub mod config;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
