//! Backup traversal and report assembly for the `tasklens` command.
//!
//! The decoding itself lives in `tasklens-decode`; this crate walks a backup
//! document (Projects, Profiles, Tasks, Scenes), feeds each record to the
//! engine and lays the resulting lines out as a plain text or HTML report.

pub mod backup;
pub mod codes;
pub mod report;

pub use backup::{Backup, BackupError};
pub use codes::{code_rows, CodeRow};
pub use report::{document, render_report};
