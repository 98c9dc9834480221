//! Console command parsing

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line
    Empty,
    About,
    Quit,
    /// Print the current ranking
    Status,
    /// Print the match history
    Matches,
    Save,
    Load,
    Help,
    /// Undo the match at this position from the end
    Undo(usize),
    /// `<winner>:<loser>`
    Match { winner: String, loser: String },
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        match line {
            "" => return Command::Empty,
            "about" => return Command::About,
            "quit" | "exit" | ":q!" => return Command::Quit,
            "status" | "print" => return Command::Status,
            "matches" => return Command::Matches,
            "save" => return Command::Save,
            "load" => return Command::Load,
            "help" => return Command::Help,
            "undo" => return Command::Undo(1),
            _ => {}
        }

        if let Some(argument) = line.strip_prefix("undo ") {
            let argument = argument.trim();
            if !argument.is_empty() && argument.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(position) = argument.parse() {
                    return Command::Undo(position);
                }
            }
            return Command::Unknown(line.to_string());
        }

        if let Some((winner, loser)) = line.split_once(':') {
            let (winner, loser) = (winner.trim(), loser.trim());
            if !winner.is_empty() && !loser.is_empty() && !loser.contains(':') {
                return Command::Match {
                    winner: winner.to_string(),
                    loser: loser.to_string(),
                };
            }
        }

        Command::Unknown(line.to_string())
    }
}

pub const HELP_TEXT: &str =
    "Commands: about, quit, print, matches, save, load, undo [num], <winner name>:<loser name>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("about"), Command::About);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse(":q!"), Command::Quit);
        assert_eq!(Command::parse("print"), Command::Status);
        assert_eq!(Command::parse("status"), Command::Status);
        assert_eq!(Command::parse("matches"), Command::Matches);
        assert_eq!(Command::parse(" save "), Command::Save);
        assert_eq!(Command::parse("load"), Command::Load);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn test_undo_positions() {
        assert_eq!(Command::parse("undo"), Command::Undo(1));
        assert_eq!(Command::parse("undo 3"), Command::Undo(3));
        assert_eq!(Command::parse("undo 0"), Command::Undo(0));
        assert!(matches!(Command::parse("undo -1"), Command::Unknown(_)));
        assert!(matches!(Command::parse("undo x"), Command::Unknown(_)));
    }

    #[test]
    fn test_match_outcome() {
        assert_eq!(
            Command::parse("jana:petr"),
            Command::Match {
                winner: "jana".to_string(),
                loser: "petr".to_string()
            }
        );
        assert_eq!(
            Command::parse("Jana : Petr"),
            Command::Match {
                winner: "Jana".to_string(),
                loser: "Petr".to_string()
            }
        );
        assert!(matches!(Command::parse("jana:"), Command::Unknown(_)));
        assert!(matches!(Command::parse("a:b:c"), Command::Unknown(_)));
        assert!(matches!(Command::parse("dance"), Command::Unknown(_)));
    }
}
