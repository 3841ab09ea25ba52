use std::str::FromStr;

use roster_model::UserId;
use thiserror::Error;

/// One line typed at the `roster>` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Page(u32),
    Next,
    Prev,
    New,
    Edit(UserId),
    Show(UserId),
    Delete(UserId),
    Health,
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("'{value}' is not a valid {what}")]
    InvalidArgument { value: String, what: &'static str },
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
}

pub const HELP: &str = "\
Commands:
  list            reload the current page
  page <n>        go to page n
  next | prev     move one page forward or back
  new             create a user
  edit <id>       edit a user
  show <id>       show a user's details
  delete <id>     delete a user (asks first)
  health          check the backend
  dismiss         clear the notification
  help            show this help
  quit            exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(CommandError::Unknown(line.trim().to_string()));
        }

        let command = match head.to_ascii_lowercase().as_str() {
            "list" | "ls" | "reload" => no_arg("list", arg, Command::List)?,
            "page" => Command::Page(page_arg(arg)?),
            "next" | "n" => no_arg("next", arg, Command::Next)?,
            "prev" | "p" => no_arg("prev", arg, Command::Prev)?,
            "new" | "create" => no_arg("new", arg, Command::New)?,
            "edit" => Command::Edit(id_arg("edit", arg)?),
            "show" | "view" => Command::Show(id_arg("show", arg)?),
            "delete" | "rm" => Command::Delete(id_arg("delete", arg)?),
            "health" => no_arg("health", arg, Command::Health)?,
            "dismiss" => no_arg("dismiss", arg, Command::Dismiss)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(head.to_string())),
        };
        Ok(command)
    }
}

fn no_arg(name: &'static str, arg: Option<&str>, command: Command) -> Result<Command, CommandError> {
    match arg {
        None => Ok(command),
        Some(_) => Err(CommandError::UnexpectedArgument(name)),
    }
}

fn page_arg(arg: Option<&str>) -> Result<u32, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument {
        command: "page",
        what: "a page number",
    })?;
    match raw.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(CommandError::InvalidArgument {
            value: raw.to_string(),
            what: "page number",
        }),
    }
}

fn id_arg(command: &'static str, arg: Option<&str>) -> Result<UserId, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument {
        command,
        what: "a user id",
    })?;
    raw.parse::<UserId>()
        .map_err(|_| CommandError::InvalidArgument {
            value: raw.to_string(),
            what: "user id",
        })
}
