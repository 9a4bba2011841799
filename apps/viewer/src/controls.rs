#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Retry,
    Quit,
    Unknown,
}

pub fn parse_action(line: &str) -> Action {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "retry" | "reload" => Action::Retry,
        "q" | "quit" | "exit" => Action::Quit,
        _ => Action::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_retry_and_quit_keys() {
        assert_eq!(parse_action("r\n"), Action::Retry);
        assert_eq!(parse_action(" Retry "), Action::Retry);
        assert_eq!(parse_action("q"), Action::Quit);
        assert_eq!(parse_action(""), Action::Unknown);
        assert_eq!(parse_action("x"), Action::Unknown);
    }
}
