/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Print the board and whose turn it is
    Show,
    /// Legal moves of one square, or of the whole side with no argument
    Moves(Option<String>),
    /// A move in coordinate notation
    Play(String),
    Undo,
    NewGame,
    /// Print the FEN, or load one when given
    Fen(Option<String>),
    Set { name: String, value: Option<String> },
    Options,
    Status,
    /// Count move-tree leaves to a depth
    Perft(usize),
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line of input. Blank lines yield `None`.
///
/// A bare token that looks like coordinate notation (`e2e4`, `e7e8q`) is
/// taken as a move.
pub fn parse_shell_command(line: &str) -> Option<ShellCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let rest = || {
        let joined = parts[1..].join(" ");
        (!joined.is_empty()).then_some(joined)
    };

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "show" | "board" | "d" if parts.get(1) == Some(&"options") => ShellCommand::Options,
        "show" | "board" | "d" => ShellCommand::Show,
        "moves" | "select" => ShellCommand::Moves(parts.get(1).map(|s| (*s).to_string())),
        "move" | "play" => match parts.get(1) {
            Some(mv) => ShellCommand::Play((*mv).to_string()),
            None => ShellCommand::Unknown(trimmed.to_string()),
        },
        "undo" | "back" => ShellCommand::Undo,
        "new" | "reset" => ShellCommand::NewGame,
        "fen" => ShellCommand::Fen(rest()),
        "set" => match parts.get(1) {
            Some(name) => ShellCommand::Set {
                name: (*name).to_string(),
                value: parts.get(2).map(|v| (*v).to_string()),
            },
            None => ShellCommand::Unknown(trimmed.to_string()),
        },
        "options" => ShellCommand::Options,
        "status" => ShellCommand::Status,
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            ShellCommand::Perft(depth)
        }
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        token if parts.len() == 1 && looks_like_move(token) => {
            ShellCommand::Play(token.to_string())
        }
        _ => ShellCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

fn looks_like_move(token: &str) -> bool {
    let bytes = token.as_bytes();
    let square = |f: u8, r: u8| (b'a'..=b'h').contains(&f) && (b'1'..=b'8').contains(&r);
    matches!(bytes.len(), 4 | 5) && square(bytes[0], bytes[1]) && square(bytes[2], bytes[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_move() {
        assert_eq!(
            parse_shell_command("e2e4"),
            Some(ShellCommand::Play("e2e4".to_string()))
        );
        assert_eq!(
            parse_shell_command("  e7e8q "),
            Some(ShellCommand::Play("e7e8q".to_string()))
        );
        assert!(matches!(
            parse_shell_command("e2e9"),
            Some(ShellCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_perft_depth() {
        assert_eq!(parse_shell_command("perft 3"), Some(ShellCommand::Perft(3)));
        assert_eq!(parse_shell_command("perft"), Some(ShellCommand::Perft(1)));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_shell_command("   "), None);
    }

    #[test]
    fn test_show_options() {
        assert_eq!(parse_shell_command("show options"), Some(ShellCommand::Options));
        assert_eq!(parse_shell_command("show"), Some(ShellCommand::Show));
    }

    #[test]
    fn test_fen_with_argument() {
        let cmd = parse_shell_command("fen 8/8/8/8/8/8/8/K1k5 w - - 0 1");
        assert_eq!(
            cmd,
            Some(ShellCommand::Fen(Some("8/8/8/8/8/8/8/K1k5 w - - 0 1".to_string())))
        );
        assert_eq!(parse_shell_command("fen"), Some(ShellCommand::Fen(None)));
    }
}
