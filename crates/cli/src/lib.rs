//! `stockbook-cli`
//!
//! **Responsibility:** thin presentation layer over the inventory service.
//!
//! It turns raw text into typed ids/quantities, calls the service, and re-renders
//! the item table after every successful command. It performs no validation of its
//! own beyond parsing; whatever the service rejects is reported and the table is
//! left as it was.

pub mod config;
pub mod oneshot;
pub mod render;
pub mod shell;

pub use config::{Cli, Command, OneShot};
pub use oneshot::run_once;
pub use render::render_table;
pub use shell::{Outcome, Shell, ShellCommand};
