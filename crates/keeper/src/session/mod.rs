//! The interpreter: one [`Session`] per run, one [`Response`] per line.
//!
//! A session owns both collections and their stores. Each command reaches
//! only the collection and store of its own category; the executors in
//! [`task`] and [`contact`] never see the other pair.

mod contact;
mod task;

use keeper_config::KeeperConfig;
use keeper_core::collection::render_numbered;
use keeper_core::{Collection, Command, Contact, KeeperError, Record, Task};
use keeper_storage::{LoadOutcome, RecordStore};
use tracing::{debug, warn};

use crate::messages;

/// What a command produced for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The message to show.
    pub text: String,
    /// Non-fatal problems, such as a save that did not reach the disk.
    pub warnings: Vec<KeeperError>,
    /// `true` once the session has ended.
    pub exit: bool,
}

impl Response {
    fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warnings: Vec::new(),
            exit: false,
        }
    }

    fn with_warnings(mut self, warnings: Vec<KeeperError>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// A running interpreter over the task and contact collections.
pub struct Session {
    tasks: Collection<Task>,
    task_store: RecordStore<Task>,
    contacts: Collection<Contact>,
    contact_store: RecordStore<Contact>,
    /// Set while a store that failed to load is still on disk untouched;
    /// shutdown then leaves it alone.
    tasks_held: bool,
    contacts_held: bool,
    finished: bool,
}

impl Session {
    /// Opens the stores named by `config` and loads both collections.
    ///
    /// Returns the session and any load warnings, already rendered.
    pub fn open(config: &KeeperConfig) -> Result<(Self, Vec<String>), KeeperError> {
        let task_store = RecordStore::open_file(config.task_path())?;
        let contact_store = RecordStore::open_file(config.contact_path())?;
        Ok(Self::load(
            task_store,
            contact_store,
            config.quarantine_corrupted,
        ))
    }

    /// Loads both collections from already-open stores.
    ///
    /// A store that cannot be loaded starts empty; the reason is returned
    /// as a warning rather than failing the session. If the unreadable file
    /// was not moved aside, it is only overwritten once a command changes
    /// that collection.
    pub fn load(
        task_store: RecordStore<Task>,
        contact_store: RecordStore<Contact>,
        quarantine: bool,
    ) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let (tasks, tasks_held) =
            take_loaded(task_store.load_or_recover(quarantine), &mut warnings);
        let (contacts, contacts_held) =
            take_loaded(contact_store.load_or_recover(quarantine), &mut warnings);
        debug!(tasks = tasks.len(), contacts = contacts.len(), "session opened");

        let session = Self {
            tasks,
            task_store,
            contacts,
            contact_store,
            tasks_held,
            contacts_held,
            finished: false,
        };
        (session, warnings)
    }

    /// Parses and executes one line of input.
    pub fn handle(&mut self, line: &str) -> Result<Response, KeeperError> {
        let result = keeper_core::parse(line).and_then(|command| self.execute(command));
        match &result {
            Err(err) if err.is_user_error() => debug!(%err, "command rejected"),
            Err(err) => warn!(%err, "command failed"),
            Ok(_) => {}
        }
        result
    }

    /// Executes an already-parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Response, KeeperError> {
        let mutating = command.is_mutating();
        debug!(?command, mutating, "executing");
        match command {
            Command::Task(cmd) => {
                let result = task::execute(cmd, &mut self.tasks, &self.task_store);
                if mutating && result.is_ok() {
                    self.tasks_held = false;
                }
                result
            }
            Command::Contact(cmd) => {
                let result = contact::execute(cmd, &mut self.contacts, &self.contact_store);
                if mutating && result.is_ok() {
                    self.contacts_held = false;
                }
                result
            }
            Command::Exit => {
                let warnings = self.shutdown();
                Ok(Response {
                    text: messages::FAREWELL.to_owned(),
                    warnings,
                    exit: true,
                })
            }
        }
    }

    /// Persists both collections and ends the session.
    ///
    /// Only the first call writes; later calls return no warnings. A held
    /// store is skipped.
    pub fn shutdown(&mut self) -> Vec<KeeperError> {
        if self.finished {
            return Vec::new();
        }
        self.finished = true;
        let mut warnings = Vec::new();
        if self.tasks_held {
            debug!(location = %self.task_store.location(), "leaving unloaded store in place");
        } else {
            warnings.extend(persist(&self.task_store, &self.tasks));
        }
        if self.contacts_held {
            debug!(location = %self.contact_store.location(), "leaving unloaded store in place");
        } else {
            warnings.extend(persist(&self.contact_store, &self.contacts));
        }
        debug!("session closed");
        warnings
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &Collection<Task> {
        &self.tasks
    }

    #[cfg(test)]
    pub fn contacts(&self) -> &Collection<Contact> {
        &self.contacts
    }
}

/// Returns the collection and whether its store must be held.
fn take_loaded<R: Record>(
    outcome: LoadOutcome<R>,
    warnings: &mut Vec<String>,
) -> (Collection<R>, bool) {
    let Some(err) = outcome.warning else {
        return (outcome.collection, false);
    };
    let mut text = err.to_string();
    let held = match outcome.quarantined_to {
        Some(to) => {
            text.push('\n');
            text.push_str(&messages::quarantined(&to));
            false
        }
        None => true,
    };
    warnings.push(text);
    (outcome.collection, held)
}

// ---------------------------------------------------------------------------
// Operations shared by every record kind
// ---------------------------------------------------------------------------

/// Saves `collection`, turning a failure into a warning.
///
/// The in-memory collection is kept either way.
fn persist<R: Record>(store: &RecordStore<R>, collection: &Collection<R>) -> Vec<KeeperError> {
    match store.save(collection) {
        Ok(()) => Vec::new(),
        Err(e) => {
            warn!(
                location = %store.location(),
                error = %e,
                "save failed, keeping changes in memory"
            );
            vec![e.into()]
        }
    }
}

fn list<R: Record>(collection: &Collection<R>) -> Response {
    if collection.is_empty() {
        return Response::message(R::EMPTY_LISTING);
    }
    Response::message(messages::listing::<R>(&collection.render()))
}

fn add<R: Record>(
    record: R,
    collection: &mut Collection<R>,
    store: &RecordStore<R>,
) -> Response {
    let size = collection.add(record.clone());
    Response::message(messages::added(&record, size)).with_warnings(persist(store, collection))
}

fn delete<R: Record>(
    index: usize,
    collection: &mut Collection<R>,
    store: &RecordStore<R>,
) -> Result<Response, KeeperError> {
    let removed = collection.remove_at(index)?;
    Ok(
        Response::message(messages::deleted(&removed, collection.len()))
            .with_warnings(persist(store, collection)),
    )
}

fn find<R: Record>(keyword: &str, collection: &Collection<R>) -> Response {
    let matches = collection.find(keyword);
    if matches.is_empty() {
        return Response::message(messages::nothing_found::<R>(keyword));
    }
    Response::message(messages::found(&render_numbered(matches)))
}
