//! Task command executors.

use keeper_core::{Collection, KeeperError, Task, TaskCommand};
use keeper_storage::RecordStore;

use super::{Response, add, delete, find, list, persist};
use crate::messages;

pub(super) fn execute(
    command: TaskCommand,
    tasks: &mut Collection<Task>,
    store: &RecordStore<Task>,
) -> Result<Response, KeeperError> {
    match command {
        TaskCommand::List => Ok(list(tasks)),
        TaskCommand::Add(task) => Ok(add(task, tasks, store)),
        TaskCommand::Delete(index) => delete(index, tasks, store),
        TaskCommand::Mark(index) => mark(index, true, tasks, store),
        TaskCommand::Unmark(index) => mark(index, false, tasks, store),
        TaskCommand::Find(keyword) => Ok(find(&keyword, tasks)),
    }
}

/// Sets the done flag, refusing if the task is already in that state.
fn mark(
    index: usize,
    done: bool,
    tasks: &mut Collection<Task>,
    store: &RecordStore<Task>,
) -> Result<Response, KeeperError> {
    let task = tasks.get_mut(index)?;
    if task.is_done() == done {
        return Err(KeeperError::AlreadyInState {
            index,
            state: if done { "done" } else { "not done" }.to_owned(),
        });
    }

    let text = if done {
        task.mark_done();
        messages::marked(&*task)
    } else {
        task.mark_undone();
        messages::unmarked(&*task)
    };
    Ok(Response::message(text).with_warnings(persist(store, tasks)))
}
