//! Mode-list parsing.
//!
//! Parses caller-supplied mode lists into a normalized [`ModeSet`] before
//! resolution; unrecognized names are rejected here, at the boundary.

use crate::{InvalidMode, Mode, ModeSet};

/// Parse a mode list into a [`ModeSet`].
///
/// Accepts comma or whitespace separated mode names ("normal,visual",
/// "insert command"), including vim aliases and shorthand letters, or a
/// bare cluster of shorthand letters ("nvo"). Order and duplicates are
/// irrelevant.
///
/// # Examples
/// ```
/// use vimkit_modes::{parse_mode_list, Mode, ModeSet};
/// let set = parse_mode_list("normal, visual").unwrap();
/// assert_eq!(set, ModeSet::from_modes(&[Mode::Normal, Mode::Visual]));
/// assert_eq!(parse_mode_list("nvo").unwrap().len(), 3);
/// assert!(parse_mode_list("gibberish").is_err());
/// ```
pub fn parse_mode_list(input: &str) -> Result<ModeSet, InvalidMode> {
    let mut set = ModeSet::empty();
    for word in input.split([',', ' ', '\t']).filter(|w| !w.is_empty()) {
        if let Some(mode) = Mode::from_name(word) {
            set |= ModeSet::from(mode);
            continue;
        }
        // Not a name: try a shorthand cluster like "nvo".
        let cluster: Option<Vec<Mode>> = word.chars().map(Mode::from_char).collect();
        match cluster {
            Some(modes) if word.chars().count() > 1 => {
                for mode in modes {
                    set |= ModeSet::from(mode);
                }
            }
            _ => return Err(InvalidMode(word.to_string())),
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        let set = parse_mode_list("normal,visual").unwrap();
        assert_eq!(set, ModeSet::from_modes(&[Mode::Normal, Mode::Visual]));
    }

    #[test]
    fn parse_mixed_separators() {
        let set = parse_mode_list("insert  command,\toperator").unwrap();
        assert_eq!(
            set,
            ModeSet::from_modes(&[Mode::Insert, Mode::Command, Mode::Operator])
        );
    }

    #[test]
    fn parse_shorthand_cluster() {
        let set = parse_mode_list("nvo").unwrap();
        assert_eq!(
            set,
            ModeSet::from_modes(&[Mode::Normal, Mode::Visual, Mode::Operator])
        );
    }

    #[test]
    fn parse_single_letters() {
        assert_eq!(
            parse_mode_list("l").unwrap(),
            ModeSet::from_modes(&[Mode::Lang])
        );
    }

    #[test]
    fn parse_duplicates_collapse() {
        let set = parse_mode_list("normal n normal").unwrap();
        assert_eq!(set, ModeSet::from_modes(&[Mode::Normal]));
    }

    #[test]
    fn parse_empty_is_empty_set() {
        assert_eq!(parse_mode_list("").unwrap(), ModeSet::empty());
        assert_eq!(parse_mode_list("  ,  ").unwrap(), ModeSet::empty());
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            parse_mode_list("normal,bogus"),
            Err(InvalidMode("bogus".to_string()))
        );
        // A cluster with one bad letter fails as a whole.
        assert_eq!(parse_mode_list("nxv"), Err(InvalidMode("nxv".to_string())));
    }
}
