//! Form state management for the hypertension risk client.
//!
//! Explicit `set_field`/`snapshot` calls replace the original two-way
//! binding: edits store raw strings with no validation, and every constraint
//! is checked exactly once, when [`FormState::snapshot`] assembles the
//! immutable [`FormSnapshot`] that goes on the wire.

pub mod error;
pub mod snapshot;
pub mod state;

pub use error::{FormError, Result};
pub use snapshot::FormSnapshot;
pub use state::FormState;
