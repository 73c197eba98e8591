//! codac core: document hierarchy and attendance date rules
//!
//! Pure, synchronous building blocks used by the codac learning platform:
//! turning flat document records into the ordered sidebar tree, and deciding
//! which calendar dates attendance may be recorded or edited for.

pub mod attendance;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod tooling;
pub mod tree;
pub mod types;
