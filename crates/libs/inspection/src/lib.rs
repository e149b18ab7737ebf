#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools
)]

mod aggregate;
mod analyzer;
mod inspect;
mod normalizer;
mod record;

pub use aggregate::*;
pub use analyzer::*;
pub use inspect::*;
pub use record::*;
