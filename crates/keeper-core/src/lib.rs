//! Core types for the keeper assistant.
//!
//! Records (tasks and contacts), the ordered collections holding them, the
//! pipe-delimited line codec used by the store files, and the command
//! grammar. Nothing in this crate performs I/O.

pub mod collection;
pub mod contact;
pub mod datetime;
pub mod enums;
pub mod error;
pub mod grammar;
pub mod line;
pub mod record;
pub mod task;
pub mod validation;

pub use collection::Collection;
pub use contact::Contact;
pub use error::{KeeperError, Result};
pub use grammar::{Command, ContactCommand, TaskCommand, parse};
pub use record::Record;
pub use task::{Schedule, Task};
