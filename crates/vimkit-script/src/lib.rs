//! vimkit-script: pure string helpers for driving vim from scripts.
//!
//! Builds the command strings a vim embedding executes (mapping
//! installation, `normal` invocations) and extracts buffer text fragments
//! (word under cursor). Nothing here talks to an editor; callers hand the
//! resulting strings to their host binding and feed in buffer text they
//! fetched themselves.

pub mod ex;
pub mod word;

pub use ex::*;
pub use word::*;
