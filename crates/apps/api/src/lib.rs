#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod api_state;
mod jobs;
mod routes;
mod server;

pub use jobs::*;
pub use routes::*;
pub use server::*;
