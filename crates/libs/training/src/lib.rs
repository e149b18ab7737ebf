#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod builder;
mod packs;
mod request;

pub use builder::*;
pub use packs::*;
pub use request::*;
