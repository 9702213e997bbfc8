use super::command::{Command, HELP};
use super::error::ShellError;
use crate::core::{MovieData, MovieError};
use crate::storage::MovieStore;
use serde_json::{Value, json};
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(Value),
    Text(String),
    Exit,
}

impl Output {
    pub fn render(&self) -> String {
        match self {
            Self::Json(value) => format!("{:#}", value),
            Self::Text(text) => text.clone(),
            Self::Exit => String::new(),
        }
    }
}

/// Counters reported when a run ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

/// A shell bound to one store
pub struct Session {
    store: MovieStore,
    fail_fast: bool,
    prompt: Option<String>,
}

impl Session {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store,
            fail_fast: false,
            prompt: None,
        }
    }

    /// Stop at the first failing command instead of reporting and moving on
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    /// Prompt written before each line is read
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    pub fn into_store(self) -> MovieStore {
        self.store
    }

    /// Create every entry in order and return the resulting record count
    pub fn seed(&mut self, entries: Vec<MovieData>) -> usize {
        let mut count = self.store.len();
        for entry in entries {
            count = self.store.create(entry);
        }
        info!(count, "store seeded");
        count
    }

    pub fn execute(&mut self, command: Command) -> Result<Output, ShellError> {
        debug!(?command, "executing");

        let output = match command {
            Command::List => Output::Json(serde_json::to_value(self.store.get_all())?),
            Command::Get(id) => Output::Json(self.store.get_one(id)?.to_json()),
            Command::Create(data) => {
                let count = self.store.create(data);
                let id = self.store.last_created_id();
                Output::Json(json!({ "id": id, "count": count }))
            }
            Command::Update(id, data) => {
                self.store.update(id, data)?;
                Output::Json(self.store.get_one(id)?.to_json())
            }
            Command::Delete(id) => Output::Json(serde_json::to_value(self.store.delete_one(id)?)?),
            Command::Count => Output::Json(json!({ "count": self.store.len() })),
            Command::Help => Output::Text(HELP.to_string()),
            Command::Exit => Output::Exit,
        };

        Ok(output)
    }

    pub fn execute_line(&mut self, line: &str) -> Result<Option<Output>, ShellError> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Read commands from `reader` until EOF or `exit`, writing results to `writer`.
    ///
    /// A line that is not valid UTF-8 counts as a failed command.
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<RunSummary, ShellError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        let mut summary = RunSummary::default();

        loop {
            if let Some(prompt) = &self.prompt {
                writer.write_all(prompt.as_bytes()).await?;
                writer.flush().await?;
            }

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let result = decode_line(&buf).and_then(|line| self.execute_line(line));
            match result {
                Ok(None) => continue,
                Ok(Some(Output::Exit)) => break,
                Ok(Some(output)) => {
                    summary.executed += 1;
                    writer.write_all(output.render().as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }
                Err(err) => {
                    summary.failed += 1;
                    if self.fail_fast {
                        return Err(err);
                    }
                    warn!(error = %err, "command failed");
                    writer.write_all(format!("error: {}\n", err).as_bytes()).await?;
                }
            }
        }

        writer.flush().await?;
        Ok(summary)
    }
}

fn decode_line(raw: &[u8]) -> Result<&str, ShellError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|e| ShellError::parse(format!("line is not valid UTF-8: {}", e)))
}

/// Read a JSON array of movie objects
pub async fn load_seed_file(path: &Path) -> Result<Vec<MovieData>, MovieError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| MovieError::Seed(format!("{}: {}", path.display(), e)))?;
    parse_seed(&raw).map_err(|message| MovieError::Seed(format!("{}: {}", path.display(), message)))
}

fn parse_seed(raw: &str) -> Result<Vec<MovieData>, String> {
    let entries: Vec<Value> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(map) => Ok(map),
            _ => Err(format!("entry {} is not a JSON object", index)),
        })
        .collect()
}
