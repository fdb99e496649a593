//! Contact command executors.

use keeper_core::{Collection, Contact, ContactCommand, KeeperError};
use keeper_storage::RecordStore;

use super::{Response, add, delete, find, list};

pub(super) fn execute(
    command: ContactCommand,
    contacts: &mut Collection<Contact>,
    store: &RecordStore<Contact>,
) -> Result<Response, KeeperError> {
    match command {
        ContactCommand::List => Ok(list(contacts)),
        ContactCommand::Add(contact) => Ok(add(contact, contacts, store)),
        ContactCommand::Delete(index) => delete(index, contacts, store),
        ContactCommand::Find(keyword) => Ok(find(&keyword, contacts)),
    }
}
