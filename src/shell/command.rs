use super::autocomplete::Autocompleter;
use super::error::ShellError;
use crate::core::{MovieData, MovieId};
use serde_json::Value;

/// One shell instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Get(MovieId),
    Create(MovieData),
    Update(MovieId, MovieData),
    Delete(MovieId),
    Count,
    Help,
    Exit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    ///
    /// ```
    /// use moviestore::shell::Command;
    ///
    /// let command = Command::parse(r#"update 3 {"year": 1999}"#).unwrap();
    /// assert!(matches!(command, Some(Command::Update(3, _))));
    /// assert_eq!(Command::parse("# comment").unwrap(), None);
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = split_word(line);
        let command = match verb.to_lowercase().as_str() {
            "list" | "ls" => no_args(Self::List, verb, rest)?,
            "get" => Self::Get(parse_id(rest)?),
            "create" => Self::Create(parse_data(rest)?),
            "update" => {
                let (id, json) = split_word(rest);
                Self::Update(parse_id(id)?, parse_data(json)?)
            }
            "delete" | "rm" => Self::Delete(parse_id(rest)?),
            "count" => no_args(Self::Count, verb, rest)?,
            "help" => no_args(Self::Help, verb, rest)?,
            "exit" | "quit" => no_args(Self::Exit, verb, rest)?,
            _ => return Err(unknown_command(verb)),
        };

        Ok(Some(command))
    }
}

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  list | ls               show every movie
  get <id>                show one movie
  create <json>           add a movie, e.g. create {\"title\": \"Alien\", \"year\": 1979}
  update <id> <json>      merge fields into a movie
  delete <id> | rm <id>   remove a movie
  count                   number of movies
  help                    this text
  exit | quit             leave the shell";

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn no_args(command: Command, verb: &str, rest: &str) -> Result<Command, ShellError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ShellError::parse(format!("'{}' takes no arguments", verb)))
    }
}

fn parse_id(input: &str) -> Result<MovieId, ShellError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ShellError::parse("missing movie id"));
    }
    input
        .parse::<MovieId>()
        .map_err(|_| ShellError::parse(format!("invalid movie id '{}'", input)))
}

fn parse_data(input: &str) -> Result<MovieData, ShellError> {
    if input.trim().is_empty() {
        return Err(ShellError::parse("missing JSON object"));
    }
    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ShellError::parse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ShellError::parse(format!("invalid JSON: {}", e))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn unknown_command(verb: &str) -> ShellError {
    let completer = Autocompleter::new();
    let mut suggestions = completer.get_suggestions(verb);
    if suggestions.is_empty() {
        if let Some(first) = verb.get(..1) {
            suggestions = completer.get_suggestions(first);
        }
    }

    if suggestions.is_empty() {
        ShellError::parse(format!("unknown command '{}'", verb))
    } else {
        ShellError::parse(format!(
            "unknown command '{}', did you mean: {}",
            verb,
            suggestions.join(", ")
        ))
    }
}
