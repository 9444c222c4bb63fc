//! Careers Admin - Dioxus Web Console
//!
//! Single-page admin console for blog posts, job postings, applicants and
//! subadmin accounts. All data lives behind the backend's REST API; this app
//! keeps only the login session, in the browser's localStorage.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! API_BASE_URL=http://localhost:8000 dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! API_BASE_URL=https://api.example.com dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod config;
mod format;
mod pages;
mod routes;
mod state;

fn main() {
    // On wasm the Dioxus logger forwards tracing to the browser console.
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    dioxus::launch(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,admin_web=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
