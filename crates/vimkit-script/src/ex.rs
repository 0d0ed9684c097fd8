//! Ex-command builders for installing key bindings.

use vimkit_modes::{resolve, MappingCommand, ModeSet};

/// Format a single mapping command line, e.g. `nmap <Leader>r :ruby run<CR>`.
pub fn map_command(command: MappingCommand, lhs: &str, rhs: &str) -> String {
    format!("{} {} {}", command.name(), lhs, rhs)
}

/// Resolve `requested` and format one mapping line per resolved command.
///
/// Executing every returned line installs the binding in the requested
/// modes (or the smallest achievable superset). `None` when no command
/// combination covers the request.
pub fn map_commands(requested: ModeSet, lhs: &str, rhs: &str) -> Option<Vec<String>> {
    resolve(requested).map(|commands| {
        commands
            .into_iter()
            .map(|command| map_command(command, lhs, rhs))
            .collect()
    })
}

/// Wrap raw keystrokes in an ex `normal` invocation, escaping `<` so key
/// notation like `<ESC>` survives the double-quoted string.
pub fn normal_command(keys: &str) -> String {
    format!("exec \"normal {}\"", keys).replace('<', "\\<")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vimkit_modes::Mode;

    #[test]
    fn formats_single_mapping() {
        assert_eq!(
            map_command(MappingCommand::Nmap, "<Leader>vh", ":ruby home<CR>"),
            "nmap <Leader>vh :ruby home<CR>"
        );
        assert_eq!(
            map_command(MappingCommand::MapBang, "jk", "<ESC>"),
            "map! jk <ESC>"
        );
    }

    #[test]
    fn resolves_then_formats() {
        let lines = map_commands(
            ModeSet::from_modes(&[Mode::Normal, Mode::Visual]),
            "\\r",
            ":ruby run_spec<CR>",
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![
                "nmap \\r :ruby run_spec<CR>".to_string(),
                "vmap \\r :ruby run_spec<CR>".to_string(),
            ]
        );
    }

    #[test]
    fn compound_request_emits_one_line() {
        let lines = map_commands(
            ModeSet::from_modes(&[Mode::Normal, Mode::Visual, Mode::Operator]),
            "Q",
            "gq",
        )
        .unwrap();
        assert_eq!(lines, vec!["map Q gq".to_string()]);
    }

    #[test]
    fn unresolvable_request_builds_nothing() {
        assert_eq!(
            map_commands(ModeSet::from_modes(&[Mode::Normal, Mode::Lang]), "x", "y"),
            None
        );
        assert_eq!(map_commands(ModeSet::empty(), "x", "y"), None);
    }

    #[test]
    fn normal_command_escapes_key_notation() {
        assert_eq!(
            normal_command("<ESC>ihello there!<ESC>"),
            "exec \"normal \\<ESC>ihello there!\\<ESC>\""
        );
        assert_eq!(normal_command("gg"), "exec \"normal gg\"");
    }
}
