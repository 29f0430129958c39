//! Shared infrastructure for the `hrp` binary.

pub mod logging;
