//! Integration test common infrastructure.
//!
//! Provides a recording handler and a prebuilt two-command application
//! mirroring the `main` + `test` layout most tests use.

pub mod recorder;

#[allow(unused_imports)]
pub use recorder::{Recorder, test_app, test_command};
