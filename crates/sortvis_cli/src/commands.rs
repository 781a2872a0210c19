//! Interactive command parsing
//!
//! One command per stdin line. Single letters mirror the page buttons; the
//! long names are accepted too.

use sortvis_animation::SessionCommand;
use sortvis_core::{Algorithm, SortvisError};

use crate::config::MAX_DELAY_MS;

pub const HELP: &str = "\
commands:
  s            start
  p            pause
  c            continue
  a            abort
  r            restart
  g            generate new input
  d <ms>       set delay (0 jumps to the result)
  n <size>     set input size
  algorithm <name>
               switch algorithm (bubble, selection, quick)
  q            quit";

pub fn parse_command(line: &str) -> Result<SessionCommand, SortvisError> {
    let unknown = || SortvisError::UnknownCommand(line.trim().to_string());
    let mut words = line.split_whitespace();
    let name = words.next().ok_or_else(unknown)?;
    let arg = words.next();
    if words.next().is_some() {
        return Err(unknown());
    }

    let command = match (name.to_ascii_lowercase().as_str(), arg) {
        ("s" | "start", None) => SessionCommand::Start,
        ("p" | "pause", None) => SessionCommand::Pause,
        ("c" | "continue" | "resume", None) => SessionCommand::Resume,
        ("a" | "abort", None) => SessionCommand::Abort,
        ("r" | "restart", None) => SessionCommand::Restart,
        ("g" | "generate", None) => SessionCommand::Generate,
        ("q" | "quit", None) => SessionCommand::Quit,
        ("d" | "delay", Some(ms)) => {
            let ms: i64 = ms.parse().map_err(|_| unknown())?;
            SessionCommand::SetDelay(ms.min(MAX_DELAY_MS as i64))
        }
        ("n" | "size", Some(size)) => {
            SessionCommand::SetSize(size.parse().map_err(|_| unknown())?)
        }
        ("algorithm", Some(name)) => SessionCommand::SetAlgorithm(name.parse::<Algorithm>()?),
        _ => return Err(unknown()),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(parse_command("s"), Ok(SessionCommand::Start));
        assert_eq!(parse_command(" p "), Ok(SessionCommand::Pause));
        assert_eq!(parse_command("c"), Ok(SessionCommand::Resume));
        assert_eq!(parse_command("a"), Ok(SessionCommand::Abort));
        assert_eq!(parse_command("r"), Ok(SessionCommand::Restart));
        assert_eq!(parse_command("g"), Ok(SessionCommand::Generate));
        assert_eq!(parse_command("Q"), Ok(SessionCommand::Quit));
    }

    #[test]
    fn arguments() {
        assert_eq!(parse_command("d 250"), Ok(SessionCommand::SetDelay(250)));
        assert_eq!(parse_command("delay 0"), Ok(SessionCommand::SetDelay(0)));
        assert_eq!(parse_command("d 9000"), Ok(SessionCommand::SetDelay(1000)));
        assert_eq!(parse_command("d -5"), Ok(SessionCommand::SetDelay(-5)));
        assert_eq!(parse_command("n 40"), Ok(SessionCommand::SetSize(40)));
        assert_eq!(
            parse_command("algorithm quick-sort"),
            Ok(SessionCommand::SetAlgorithm(Algorithm::Quick))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_command(""), Err(SortvisError::UnknownCommand(String::new())));
        assert!(parse_command("x").is_err());
        assert!(parse_command("s now").is_err());
        assert!(parse_command("d").is_err());
        assert!(parse_command("d fast").is_err());
        assert!(parse_command("n -3").is_err());
        assert_eq!(
            parse_command("algorithm bogo"),
            Err(SortvisError::UnknownAlgorithm("bogo".to_string()))
        );
    }
}
