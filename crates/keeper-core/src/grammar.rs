//! Command grammar: one line of user text in, one typed [`Command`] out.
//!
//! ```text
//! <category> <command> [arguments]
//! bye
//! ```
//!
//! Parsing never touches a collection. Index range checks happen when the
//! command runs, against the collection's size at that moment.

use crate::contact::Contact;
use crate::datetime::parse_timestamp;
use crate::enums::{Category, CommandType};
use crate::error::{KeeperError, Result};
use crate::task::Task;

/// The keyword that ends a session.
pub const EXIT_KEYWORD: &str = "bye";

const BY_TAG: &str = " /by ";
const FROM_TAG: &str = " /from ";
const TO_TAG: &str = " /to ";

const NAME_MARKER: &str = "/name";
const PHONE_MARKER: &str = "/phone";
const EMAIL_MARKER: &str = "/email";

/// A parsed command, ready to execute once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Task(TaskCommand),
    Contact(ContactCommand),
    Exit,
}

/// Operations on the task collection. Indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    List,
    Add(Task),
    Delete(usize),
    Mark(usize),
    Unmark(usize),
    Find(String),
}

/// Operations on the contact collection. Indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactCommand {
    List,
    Add(Contact),
    Delete(usize),
    Find(String),
}

impl Command {
    /// Returns `true` if running the command changes a collection.
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::Task(cmd) => !matches!(cmd, TaskCommand::List | TaskCommand::Find(_)),
            Command::Contact(cmd) => {
                !matches!(cmd, ContactCommand::List | ContactCommand::Find(_))
            }
            Command::Exit => false,
        }
    }
}

/// Parses one line of input.
pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    if input == EXIT_KEYWORD {
        return Ok(Command::Exit);
    }

    let (category_word, rest) = next_word(input);
    let category = Category::parse(category_word)
        .ok_or_else(|| KeeperError::UnknownCategory(category_word.to_owned()))?;

    let (command_word, remainder) = next_word(rest);
    if command_word.is_empty() {
        return Err(KeeperError::MissingCommand {
            category: category.to_string(),
        });
    }
    let command = CommandType::parse(command_word)
        .filter(|cmd| category.accepts(*cmd))
        .ok_or_else(|| KeeperError::UnknownCommand {
            category: category.to_string(),
            command: command_word.to_owned(),
            expected: expected_commands(category),
        })?;

    match category {
        Category::Task => parse_task(command, remainder).map(Command::Task),
        Category::Contact => parse_contact(command, remainder).map(Command::Contact),
    }
}

fn parse_task(command: CommandType, args: &str) -> Result<TaskCommand> {
    if command == CommandType::List {
        return Ok(TaskCommand::List);
    }
    let args = require_args(Category::Task, command, args)?;
    match command {
        CommandType::Mark => parse_index(args).map(TaskCommand::Mark),
        CommandType::Unmark => parse_index(args).map(TaskCommand::Unmark),
        CommandType::Delete => parse_index(args).map(TaskCommand::Delete),
        CommandType::Todo => Task::todo(args).map(TaskCommand::Add),
        CommandType::Deadline => parse_deadline(args).map(TaskCommand::Add),
        CommandType::Event => parse_event(args).map(TaskCommand::Add),
        CommandType::Find => Ok(TaskCommand::Find(args.to_owned())),
        // Category::accepts already filtered these out.
        CommandType::List | CommandType::Add => Err(unknown(Category::Task, command)),
    }
}

fn parse_contact(command: CommandType, args: &str) -> Result<ContactCommand> {
    if command == CommandType::List {
        return Ok(ContactCommand::List);
    }
    let args = require_args(Category::Contact, command, args)?;
    match command {
        CommandType::Delete => parse_index(args).map(ContactCommand::Delete),
        CommandType::Add => parse_contact_fields(args).map(ContactCommand::Add),
        CommandType::Find => Ok(ContactCommand::Find(args.to_owned())),
        _ => Err(unknown(Category::Contact, command)),
    }
}

/// `DESCRIPTION /by TIMESTAMP`
///
/// A tag at the very start still counts, so an empty description is
/// reported as such.
fn parse_deadline(args: &str) -> Result<Task> {
    let padded = format!(" {args}");
    let (description, by) = padded
        .split_once(BY_TAG)
        .ok_or(KeeperError::MissingByTag)?;
    let due = parse_timestamp(by, "by")?;
    Task::deadline(description, due)
}

/// `DESCRIPTION /from TIMESTAMP /to TIMESTAMP`
fn parse_event(args: &str) -> Result<Task> {
    let padded = format!(" {args}");
    let (description, span) = padded
        .split_once(FROM_TAG)
        .ok_or(KeeperError::MissingEventTags)?;
    let (from, to) = span
        .split_once(TO_TAG)
        .ok_or(KeeperError::MissingEventTags)?;
    let start = parse_timestamp(from, "from")?;
    let end = parse_timestamp(to, "to")?;
    Task::event(description, start, end)
}

/// `/name NAME /phone PHONE /email EMAIL`, markers in that order.
fn parse_contact_fields(args: &str) -> Result<Contact> {
    let rest = args
        .strip_prefix(NAME_MARKER)
        .ok_or(KeeperError::MissingContactTags)?;
    let (name, rest) = rest
        .split_once(PHONE_MARKER)
        .ok_or(KeeperError::MissingContactTags)?;
    let (phone, email) = rest
        .split_once(EMAIL_MARKER)
        .ok_or(KeeperError::MissingContactTags)?;
    Contact::new(name, phone, email)
}

/// Converts a 1-based item number to a 0-based index.
fn parse_index(args: &str) -> Result<usize> {
    match args.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(KeeperError::InvalidIndex(args.to_owned())),
    }
}

fn require_args<'a>(category: Category, command: CommandType, args: &'a str) -> Result<&'a str> {
    if args.is_empty() {
        return Err(KeeperError::MissingArguments {
            command: format!("{} {}", category, command),
            usage: command.usage(category),
        });
    }
    Ok(args)
}

/// Splits off the first whitespace-delimited word; the rest is trimmed.
fn next_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn expected_commands(category: Category) -> String {
    category
        .commands()
        .iter()
        .map(CommandType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn unknown(category: Category, command: CommandType) -> KeeperError {
    KeeperError::UnknownCommand {
        category: category.to_string(),
        command: command.to_string(),
        expected: expected_commands(category),
    }
}
