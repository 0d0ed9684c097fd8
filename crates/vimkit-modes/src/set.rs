//! Compact mode sets.

use crate::Mode;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// An unordered, duplicate-free set of [`Mode`]s.
    ///
    /// Requests arrive as arbitrary mode lists; collecting them into a
    /// `ModeSet` normalizes away order and duplicates before resolution.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModeSet: u8 {
        const NORMAL = 0b000001;
        const VISUAL = 0b000010;
        const INSERT = 0b000100;
        const COMMAND = 0b001000;
        const OPERATOR = 0b010000;
        const LANG = 0b100000;
    }
}

impl From<Mode> for ModeSet {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Normal => ModeSet::NORMAL,
            Mode::Visual => ModeSet::VISUAL,
            Mode::Insert => ModeSet::INSERT,
            Mode::Command => ModeSet::COMMAND,
            Mode::Operator => ModeSet::OPERATOR,
            Mode::Lang => ModeSet::LANG,
        }
    }
}

impl FromIterator<Mode> for ModeSet {
    fn from_iter<I: IntoIterator<Item = Mode>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ModeSet::empty(), |set, mode| set | ModeSet::from(mode))
    }
}

impl ModeSet {
    /// Build from a slice of modes.
    pub fn from_modes(modes: &[Mode]) -> Self {
        modes.iter().copied().collect()
    }

    /// Whether the set contains a mode.
    pub fn contains_mode(&self, mode: Mode) -> bool {
        self.contains(ModeSet::from(mode))
    }

    /// Number of modes in the set.
    pub fn len(&self) -> u32 {
        self.bits().count_ones()
    }

    /// Iterate the contained modes in declaration order.
    pub fn modes(&self) -> impl Iterator<Item = Mode> {
        let set = *self;
        Mode::ALL.into_iter().filter(move |m| set.contains_mode(*m))
    }
}

impl fmt::Display for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.modes().map(|m| m.display_name()).collect();
        f.write_str(&names.join(","))
    }
}

impl serde::Serialize for ModeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for ModeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        ModeSet::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid mode bits: {}", bits)))
    }
}
