use crate::domain::model::ALL_DOMAINS;
use crate::utils::error::ViewerError;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  search <text>          filter by text, or by id when <text> is all digits
  clear                  clear the search text
  domain <name|all>      only show comments from one email domain
  toggle-domain <name>   expand or collapse a domain group
  toggle-comment <id>    expand or collapse a comment body
  domains                list the available domain options
  show                   render the current view
  help                   show this message
  quit                   leave the session";

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Clear,
    Domain(String),
    ToggleDomain(String),
    ToggleComment(u64),
    Domains,
    Show,
    Help,
    Quit,
}

fn command_error(input: &str, reason: &str) -> ViewerError {
    ViewerError::CommandError {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn required_arg<'a>(input: &str, arg: &'a str, what: &str) -> Result<&'a str, ViewerError> {
    if arg.is_empty() {
        Err(command_error(input, &format!("missing {}", what)))
    } else {
        Ok(arg)
    }
}

impl FromStr for Command {
    type Err = ViewerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(arg.to_string())),
            "clear" => Ok(Command::Clear),
            "domain" | "d" => {
                let domain = if arg.is_empty() { ALL_DOMAINS } else { arg };
                Ok(Command::Domain(domain.to_lowercase()))
            }
            "toggle-domain" | "td" => {
                let domain = required_arg(line, arg, "domain name")?;
                Ok(Command::ToggleDomain(domain.to_lowercase()))
            }
            "toggle-comment" | "tc" => {
                let id = required_arg(line, arg, "comment id")?;
                id.parse::<u64>()
                    .map(Command::ToggleComment)
                    .map_err(|_| command_error(line, "comment id must be a number"))
            }
            "domains" => Ok(Command::Domains),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(command_error(line, "unknown command")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "search  quis nostrum ".parse::<Command>().unwrap(),
            Command::Search("quis nostrum".to_string())
        );
        assert_eq!("clear".parse::<Command>().unwrap(), Command::Clear);
        assert_eq!(
            "domain Sydney.com".parse::<Command>().unwrap(),
            Command::Domain("sydney.com".to_string())
        );
        assert_eq!(
            "domain".parse::<Command>().unwrap(),
            Command::Domain("all".to_string())
        );
        assert_eq!(
            "td x.com".parse::<Command>().unwrap(),
            Command::ToggleDomain("x.com".to_string())
        );
        assert_eq!(
            "toggle-comment 42".parse::<Command>().unwrap(),
            Command::ToggleComment(42)
        );
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("QUIT".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "toggle-comment abc".parse::<Command>(),
            Err(ViewerError::CommandError { .. })
        ));
        assert!(matches!(
            "toggle-domain".parse::<Command>(),
            Err(ViewerError::CommandError { .. })
        ));
        assert!(matches!(
            "refresh".parse::<Command>(),
            Err(ViewerError::CommandError { .. })
        ));
    }
}
