//! HTTP service that turns an archived Manglish lyrics page into slides.
//!
//! Endpoints:
//! - /api/create_pptx_from_lyrics  POST  `{"url": "..."}` → title + slides
//! - /api/ping                     GET   health check

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
