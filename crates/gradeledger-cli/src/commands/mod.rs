//! CLI subcommand implementations.

pub mod admin;
pub mod init;
pub mod list;
pub mod predict;
pub mod record;
pub mod show;
