//! Synnet Protocol - Line-oriented command protocol
//!
//! Parses `load`, `lookup`, `find`, `findmany` and `lca` command lines,
//! runs them against the engine state and returns structured responses.

pub mod command;
pub mod handlers;
pub mod response;

pub use command::{Command, CommandKind, CommandParser, ParsedCommand};
pub use handlers::CommandHandler;
pub use response::{Payload, Response};
