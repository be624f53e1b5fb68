//! Console input parsing.

/// One line of console input, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything not starting with `/` is a question for the advisor.
    Ask(String),
    History,
    Dashboard,
    /// Mark the last answer as helpful.
    Good,
    /// Mark the last answer as unhelpful, optionally with the right answer.
    Bad(Option<String>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Ask(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name.to_ascii_lowercase().as_str() {
            "history" => Command::History,
            "dashboard" => Command::Dashboard,
            "good" => Command::Good,
            "bad" => Command::Bad((!arg.is_empty()).then(|| arg.to_string())),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(name.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a question and press Enter.
  /history            show the conversation so far
  /dashboard          refresh and show weather, market and news
  /good               rate the last answer as helpful
  /bad [correction]   rate the last answer as unhelpful
  /quit               exit";
