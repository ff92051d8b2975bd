//! tokendash: aggregates locally-stored usage telemetry into derived
//! metrics and renders them as static artifacts.
//!
//! The aggregation engine (`services`) is pure: snapshot in, derived
//! metrics out. File discovery, session log parsing, and rendering are
//! collaborators around it.

pub mod cli;
pub mod parsers;
pub mod render;
pub mod services;
pub mod types;
