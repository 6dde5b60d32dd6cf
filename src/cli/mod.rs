//! Command Line Interface (CLI) layer for facesheet.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for batch sheet generation. It
//! wires user-provided options to the underlying library functionality
//! exposed via `facesheet::api`.
//!
//! If you are embedding facesheet into another application, prefer using
//! the high-level `facesheet::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
