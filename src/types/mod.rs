//! Type definitions for tokendash

mod error;
mod metrics;
mod session;
mod snapshot;

pub use error::*;
pub use metrics::*;
pub use session::*;
pub use snapshot::*;
