//! Line-oriented presentation loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use stockbook_core::DomainError;
use stockbook_infra::{InventoryError, InventoryService};
use stockbook_inventory::ItemId;

use crate::config::OneShot;
use crate::render::render_table;

const HELP: &str = "\
commands:
  create <id> <name...>   create an item with quantity 0
  add <id> <qty>          add 1-100 units
  remove <id> <qty>       remove 1-100 units
  list                    show the inventory
  save [path]             write every item to a file
  load [path]             replace the inventory with a file's contents
  help                    show this text
  quit                    leave the shell
";

/// A single parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Create { id: ItemId, name: String },
    Add { id: ItemId, qty: i64 },
    Remove { id: ItemId, qty: i64 },
    List,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one line of raw input. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, InventoryError> {
        let line = line.trim();
        let Some((verb, rest)) = split_word(line) else {
            return Ok(None);
        };

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "create" => {
                let (id, name) = split_word(rest).ok_or_else(|| usage("create <id> <name...>"))?;
                ShellCommand::Create {
                    id: id.parse()?,
                    name: name.to_string(),
                }
            }
            "add" => {
                let (id, qty) = id_and_qty(rest, "add <id> <qty>")?;
                ShellCommand::Add { id, qty }
            }
            "remove" => {
                let (id, qty) = id_and_qty(rest, "remove <id> <qty>")?;
                ShellCommand::Remove { id, qty }
            }
            "list" | "ls" => ShellCommand::List,
            "save" => ShellCommand::Save(optional_path(rest)),
            "load" => ShellCommand::Load(optional_path(rest)),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(DomainError::validation(format!(
                    "unknown command '{other}' (try 'help')"
                ))
                .into());
            }
        };
        Ok(Some(cmd))
    }
}

impl From<OneShot> for ShellCommand {
    fn from(cmd: OneShot) -> Self {
        match cmd {
            OneShot::Create { id, name } => ShellCommand::Create {
                id: ItemId(id),
                name: name.join(" "),
            },
            OneShot::Add { id, qty } => ShellCommand::Add { id: ItemId(id), qty },
            OneShot::Remove { id, qty } => ShellCommand::Remove { id: ItemId(id), qty },
            OneShot::List => ShellCommand::List,
        }
    }
}

/// What the presentation layer should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Re-render the table, optionally after a status line.
    Refresh(Option<String>),
    Help,
    Quit,
}

/// Drives an [`InventoryService`] from text commands.
pub struct Shell<'a> {
    service: &'a InventoryService,
    default_file: PathBuf,
}

impl<'a> Shell<'a> {
    pub fn new(service: &'a InventoryService, default_file: impl Into<PathBuf>) -> Self {
        Self {
            service,
            default_file: default_file.into(),
        }
    }

    pub fn execute(&self, cmd: ShellCommand) -> Result<Outcome, InventoryError> {
        match cmd {
            ShellCommand::Create { id, name } => {
                self.service.create(id, &name)?;
                Ok(Outcome::Refresh(None))
            }
            ShellCommand::Add { id, qty } => {
                self.service.add_quantity(id, qty)?;
                Ok(Outcome::Refresh(None))
            }
            ShellCommand::Remove { id, qty } => {
                self.service.remove_quantity(id, qty)?;
                Ok(Outcome::Refresh(None))
            }
            ShellCommand::List => Ok(Outcome::Refresh(None)),
            ShellCommand::Save(path) => {
                let path = self.resolve(path);
                let count = self.service.save(&path)?;
                Ok(Outcome::Refresh(Some(format!(
                    "saved {count} item(s) to {}",
                    path.display()
                ))))
            }
            ShellCommand::Load(path) => {
                let path = self.resolve(path);
                let count = self.service.load(&path)?;
                Ok(Outcome::Refresh(Some(format!(
                    "loaded {count} item(s) from {}",
                    path.display()
                ))))
            }
            ShellCommand::Help => Ok(Outcome::Help),
            ShellCommand::Quit => Ok(Outcome::Quit),
        }
    }

    /// Read commands until EOF or `quit`.
    ///
    /// The table goes to `out` after every successful command; failures are a single
    /// line on `err` and nothing is re-rendered.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let outcome = line_text(&buf)
                .and_then(ShellCommand::parse)
                .and_then(|cmd| match cmd {
                    Some(cmd) => self.execute(cmd).map(Some),
                    None => Ok(None),
                });

            match outcome {
                Ok(None) => {}
                Ok(Some(Outcome::Quit)) => break,
                Ok(Some(Outcome::Help)) => out.write_all(HELP.as_bytes())?,
                Ok(Some(Outcome::Refresh(status))) => {
                    if let Some(status) = status {
                        writeln!(out, "{status}")?;
                    }
                    out.write_all(render_table(&self.service.list()).as_bytes())?;
                }
                Err(e) => writeln!(err, "error[{}]: {e}", e.kind())?,
            }
            out.flush()?;
        }
        Ok(())
    }

    fn resolve(&self, path: Option<PathBuf>) -> PathBuf {
        path.unwrap_or_else(|| self.default_file.clone())
    }
}

/// A line that is not valid UTF-8 is one rejected command, not the end of the session.
fn line_text(bytes: &[u8]) -> Result<&str, InventoryError> {
    std::str::from_utf8(bytes).map_err(|e| {
        DomainError::validation(format!("input line is not valid UTF-8: {e}")).into()
    })
}

fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim())),
        None => Some((s, "")),
    }
}

fn id_and_qty(rest: &str, usage_text: &str) -> Result<(ItemId, i64), InventoryError> {
    let mut parts = rest.split_whitespace();
    let (Some(id), Some(qty), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(usage(usage_text));
    };
    let id = id.parse::<ItemId>()?;
    let qty = qty
        .parse::<i64>()
        .map_err(|e| DomainError::validation(format!("quantity '{qty}': {e}")))?;
    Ok((id, qty))
}

fn optional_path(rest: &str) -> Option<PathBuf> {
    (!rest.is_empty()).then(|| PathBuf::from(rest))
}

fn usage(text: &str) -> InventoryError {
    DomainError::validation(format!("usage: {text}")).into()
}
