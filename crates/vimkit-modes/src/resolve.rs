//! Mapping-command resolution.
//!
//! Given the set of modes a binding should be active in, pick the smallest
//! set of native mapping commands that covers exactly those modes, or fall
//! back to the single command with the least extra coverage.

use crate::{parse_mode_list, InvalidMode, MappingCommand, Mode, ModeSet};
use thiserror::Error;

/// Failure outcomes for the string-boundary resolution APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A requested mode name is outside the recognized enumeration.
    #[error(transparent)]
    InvalidMode(#[from] InvalidMode),
    /// No mapping command combination covers the requested modes.
    #[error("no mapping command combination covers the requested modes")]
    Unresolvable,
}

/// Resolve a requested mode set to the mapping commands to invoke.
///
/// Invoking every returned command with the same shortcut yields a binding
/// active in exactly the requested modes when possible, otherwise in the
/// smallest achievable superset. `None` is the unresolvable outcome,
/// including the empty request.
///
/// Resolution prefers, in order:
/// 1. a single command covering exactly the requested modes,
/// 2. one single-mode command per requested mode (all or nothing),
/// 3. the single command covering the smallest superset of the request,
///    ties broken by table order.
///
/// Pure function over the static coverage table; the returned list is
/// deduplicated and sorted in table order.
pub fn resolve(requested: ModeSet) -> Option<Vec<MappingCommand>> {
    if requested.is_empty() {
        return None;
    }

    // 1. Exact single-command match.
    if let Some(command) = MappingCommand::ALL
        .into_iter()
        .find(|c| c.covered_set() == requested)
    {
        return Some(vec![command]);
    }

    // 2. Per-mode decomposition into single-mode commands, all or nothing.
    let decomposed: Option<Vec<MappingCommand>> =
        requested.modes().map(single_mode_command).collect();
    if let Some(mut commands) = decomposed {
        commands.sort();
        commands.dedup();
        return Some(commands);
    }

    // 3. Smallest covering superset. Strict comparison keeps the earliest
    // table entry on ties, which makes the fallback deterministic.
    let mut best: Option<MappingCommand> = None;
    for command in MappingCommand::ALL {
        if !command.covered_set().contains(requested) {
            continue;
        }
        match best {
            Some(b) if command.covered_set().len() >= b.covered_set().len() => {}
            _ => best = Some(command),
        }
    }
    best.map(|command| vec![command])
}

/// Resolve from mode names (full names, vim aliases, or shorthand letters).
///
/// This is the string boundary: unrecognized names fail with
/// [`ResolveError::InvalidMode`] before any resolution is attempted.
pub fn resolve_names<I, S>(names: I) -> Result<Vec<MappingCommand>, ResolveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut requested = ModeSet::empty();
    for name in names {
        let mode: Mode = name.as_ref().parse()?;
        requested |= ModeSet::from(mode);
    }
    resolve(requested).ok_or(ResolveError::Unresolvable)
}

/// Resolve from a mode-list string (see [`parse_mode_list`] for the grammar).
pub fn resolve_list(input: &str) -> Result<Vec<MappingCommand>, ResolveError> {
    let requested = parse_mode_list(input)?;
    resolve(requested).ok_or(ResolveError::Unresolvable)
}

fn single_mode_command(mode: Mode) -> Option<MappingCommand> {
    MappingCommand::ALL
        .into_iter()
        .find(|c| matches!(c.covers(), &[m] if m == mode))
}
