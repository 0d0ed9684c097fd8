//! Native vim mapping commands and their mode coverage.

use crate::{Mode, ModeSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A native vim directive that binds a shortcut within one or more modes.
///
/// `map` and `map!` are compound commands layered over the single-mode
/// commands; `lmap` is the only command that reaches Lang-Arg mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingCommand {
    Map,
    #[serde(rename = "map!")]
    MapBang,
    Nmap,
    Vmap,
    Omap,
    Cmap,
    Imap,
    Lmap,
}

impl MappingCommand {
    /// All commands, in table order.
    pub const ALL: [MappingCommand; 8] = [
        MappingCommand::Map,
        MappingCommand::MapBang,
        MappingCommand::Nmap,
        MappingCommand::Vmap,
        MappingCommand::Omap,
        MappingCommand::Cmap,
        MappingCommand::Imap,
        MappingCommand::Lmap,
    ];

    /// The ex-command text as typed in vim.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::MapBang => "map!",
            Self::Nmap => "nmap",
            Self::Vmap => "vmap",
            Self::Omap => "omap",
            Self::Cmap => "cmap",
            Self::Imap => "imap",
            Self::Lmap => "lmap",
        }
    }

    /// Parse from the ex-command text.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "map" => Some(Self::Map),
            "map!" => Some(Self::MapBang),
            "nmap" => Some(Self::Nmap),
            "vmap" => Some(Self::Vmap),
            "omap" => Some(Self::Omap),
            "cmap" => Some(Self::Cmap),
            "imap" => Some(Self::Imap),
            "lmap" => Some(Self::Lmap),
            _ => None,
        }
    }

    /// The modes this command natively covers.
    pub fn covers(&self) -> &'static [Mode] {
        match self {
            Self::Map => &[Mode::Normal, Mode::Visual, Mode::Operator],
            Self::MapBang => &[Mode::Insert, Mode::Command],
            Self::Nmap => &[Mode::Normal],
            Self::Vmap => &[Mode::Visual],
            Self::Omap => &[Mode::Operator],
            Self::Cmap => &[Mode::Command],
            Self::Imap => &[Mode::Insert],
            Self::Lmap => &[Mode::Insert, Mode::Command, Mode::Lang],
        }
    }

    /// Covered modes as a set.
    pub fn covered_set(&self) -> ModeSet {
        self.covers().iter().copied().collect()
    }
}

impl fmt::Display for MappingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
