//! Non-interactive mode: `--file` is the backing store for a single command.

use std::path::Path;

use anyhow::Context;

use stockbook_infra::{ErrorKind, InventoryService};

use crate::config::OneShot;
use crate::render::render_table;
use crate::shell::{Shell, ShellCommand};

/// Load `file` (a missing file means an empty inventory), apply `cmd`, and write the
/// file back only if `cmd` is a mutation and it succeeded. Returns the rendered table.
pub fn run_once(service: &InventoryService, file: &Path, cmd: OneShot) -> anyhow::Result<String> {
    match service.load(file) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::Io && !file.exists() => {
            tracing::info!(file = %file.display(), "no inventory file yet; starting empty");
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to load {}", file.display()));
        }
    }

    let mutation = cmd.is_mutation();
    Shell::new(service, file)
        .execute(ShellCommand::from(cmd))
        .map_err(|e| anyhow::anyhow!("error[{}]: {e}", e.kind()))?;

    if mutation {
        service
            .save(file)
            .with_context(|| format!("failed to save {}", file.display()))?;
    }

    Ok(render_table(&service.list()))
}
