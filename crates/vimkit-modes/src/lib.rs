//! vimkit-modes: Vim mode and mapping-command models, parsing, and resolution.
//!
//! Vim installs key bindings through a small family of native mapping
//! commands, each hard-wired to a fixed set of input modes:
//!
//! | command | covers                     |
//! |---------|----------------------------|
//! | `map`   | normal, visual, operator   |
//! | `map!`  | insert, command            |
//! | `nmap`  | normal                     |
//! | `vmap`  | visual                     |
//! | `omap`  | operator                   |
//! | `cmap`  | command                    |
//! | `imap`  | insert                     |
//! | `lmap`  | insert, command, lang      |
//!
//! Scripts usually think the other way around: "make this shortcut work in
//! normal and visual mode". [`resolve`] translates that requested mode set
//! into the smallest set of native commands covering exactly those modes,
//! falling back to the single command with the least extra coverage when an
//! exact covering does not exist.
//!
//! Everything here is pure and computed from the static table above; there
//! is no editor integration in this crate.

pub mod command;
pub mod mode;
pub mod parse;
pub mod resolve;
pub mod set;

pub use command::*;
pub use mode::*;
pub use parse::*;
pub use resolve::*;
pub use set::*;
