use folio_core::{Msg, NavSection};
use thiserror::Error;

pub const HELP: &str =
    "commands: nav <home|about|blog|contact>, open <id>, close, menu, theme, logo, submit, help, quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Msg),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}`; type `help`")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("no section named `{0}`")]
    UnknownSection(String),
    #[error("`{0}` is not a post id")]
    InvalidPostId(String),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "nav" | "go" => {
            let name = arg.ok_or(InputError::MissingArgument("nav"))?;
            let section = NavSection::from_anchor(name)
                .ok_or_else(|| InputError::UnknownSection(name.to_string()))?;
            Command::Intent(Msg::NavigateToSection(section))
        }
        "open" => {
            let raw = arg.ok_or(InputError::MissingArgument("open"))?;
            let post_id = raw
                .parse()
                .map_err(|_| InputError::InvalidPostId(raw.to_string()))?;
            Command::Intent(Msg::OpenArticle(post_id))
        }
        "close" | "back" => Command::Intent(Msg::CloseArticle),
        "menu" => Command::Intent(Msg::ToggleMenu),
        "theme" => Command::Intent(Msg::ToggleTheme),
        "logo" => Command::Intent(Msg::LogoClicked),
        "submit" => Command::Intent(Msg::ContactSubmitted),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}
