//! Task records: to-dos, deadlines and events.

use chrono::NaiveDateTime;

use crate::datetime::{format_display, format_storage, parse_timestamp};
use crate::enums::TaskKind;
use crate::error::{KeeperError, Result};
use crate::line::{LineError, expect_fields, join_fields, split_fields};
use crate::record::Record;
use crate::validation;

const DONE_FLAG: &str = "1";
const UNDONE_FLAG: &str = "0";

/// Variant-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// A plain to-do.
    None,
    /// A deadline due at the given time.
    Due(NaiveDateTime),
    /// An event spanning `start..=end`. `end >= start` always holds.
    Span {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A to-do, deadline or event.
///
/// Construction validates eagerly, so a `Task` value always has a trimmed,
/// non-empty description and a well-ordered event span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    schedule: Schedule,
}

impl Task {
    /// Creates an undone to-do.
    pub fn todo(description: &str) -> Result<Self> {
        Ok(Self {
            description: validation::description(description)?,
            done: false,
            schedule: Schedule::None,
        })
    }

    /// Creates an undone deadline.
    pub fn deadline(description: &str, due: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            description: validation::description(description)?,
            done: false,
            schedule: Schedule::Due(due),
        })
    }

    /// Creates an undone event; fails if `end` is before `start`.
    pub fn event(description: &str, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        let description = validation::description(description)?;
        if end < start {
            return Err(KeeperError::InvalidDateRange);
        }
        Ok(Self {
            description,
            done: false,
            schedule: Schedule::Span { start, end },
        })
    }

    /// Sets the done flag, for hydrating stored records.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn kind(&self) -> TaskKind {
        match self.schedule {
            Schedule::None => TaskKind::Todo,
            Schedule::Due(_) => TaskKind::Deadline,
            Schedule::Span { .. } => TaskKind::Event,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the task done. Callers check [`Task::is_done`] first.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the task not done. Callers check [`Task::is_done`] first.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    fn status_icon(&self) -> &'static str {
        if self.done { "X" } else { " " }
    }
}

impl Record for Task {
    const NOUN: &'static str = "task";
    const EMPTY_LISTING: &'static str = "No tasks in the list.";

    fn render(&self) -> String {
        let head = format!(
            "[{}][{}] {}",
            self.kind().tag(),
            self.status_icon(),
            self.description
        );
        match &self.schedule {
            Schedule::None => head,
            Schedule::Due(due) => format!("{} (by: {})", head, format_display(due)),
            Schedule::Span { start, end } => format!(
                "{} (from: {} to: {})",
                head,
                format_display(start),
                format_display(end)
            ),
        }
    }

    fn to_line(&self) -> String {
        let flag = if self.done { DONE_FLAG } else { UNDONE_FLAG };
        let head = [self.kind().tag(), flag, self.description.as_str()];
        match &self.schedule {
            Schedule::None => join_fields(&head),
            Schedule::Due(due) => {
                let due = format_storage(due);
                join_fields(&[head[0], head[1], head[2], &due])
            }
            Schedule::Span { start, end } => {
                let (start, end) = (format_storage(start), format_storage(end));
                join_fields(&[head[0], head[1], head[2], &start, &end])
            }
        }
    }

    fn from_line(line: &str) -> std::result::Result<Self, LineError> {
        let fields = split_fields(line);
        let kind = TaskKind::from_tag(fields[0])
            .ok_or_else(|| LineError::UnknownKind(fields[0].to_owned()))?;
        expect_fields(&fields, kind.field_count())?;

        let done = match fields[1] {
            DONE_FLAG => true,
            UNDONE_FLAG => false,
            other => return Err(LineError::InvalidFlag(other.to_owned())),
        };
        let description = fields[2];

        let task = match kind {
            TaskKind::Todo => Task::todo(description),
            TaskKind::Deadline => {
                parse_timestamp(fields[3], "by").and_then(|due| Task::deadline(description, due))
            }
            TaskKind::Event => parse_timestamp(fields[3], "from").and_then(|start| {
                let end = parse_timestamp(fields[4], "to")?;
                Task::event(description, start, end)
            }),
        }
        .map_err(|e| LineError::InvalidRecord(e.to_string()))?;

        Ok(task.with_done(done))
    }

    fn matches(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::parse_timestamp;
    use pretty_assertions::assert_eq;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s, "test").unwrap()
    }

    #[test]
    fn todo_render() {
        let mut task = Task::todo("  read book ").unwrap();
        assert_eq!(task.render(), "[T][ ] read book");
        task.mark_done();
        assert_eq!(task.render(), "[T][X] read book");
    }

    #[test]
    fn deadline_render() {
        let task = Task::deadline("submit", ts("1/1/2026 1200")).unwrap();
        assert_eq!(task.render(), "[D][ ] submit (by: 01 Jan 2026 12:00)");
    }

    #[test]
    fn event_render() {
        let task = Task::event("camp", ts("2/3/2026 0800"), ts("4/3/2026 1730")).unwrap();
        assert_eq!(
            task.render(),
            "[E][ ] camp (from: 02 Mar 2026 08:00 to: 04 Mar 2026 17:30)"
        );
    }

    #[test]
    fn event_end_before_start_fails() {
        let pairs = [
            ("1/1/2026 1200", "1/1/2026 1159"),
            ("2/1/2026 0000", "1/1/2026 2359"),
            ("1/1/2027 0900", "1/1/2026 0900"),
        ];
        for (start, end) in pairs {
            assert_eq!(
                Task::event("x", ts(start), ts(end)),
                Err(KeeperError::InvalidDateRange)
            );
        }
    }

    #[test]
    fn event_may_start_and_end_together() {
        let at = ts("1/1/2026 1200");
        assert!(Task::event("instant", at, at).is_ok());
    }

    #[test]
    fn empty_description_fails() {
        assert!(matches!(Task::todo(""), Err(KeeperError::InvalidInput(_))));
        assert!(matches!(
            Task::deadline(" ", ts("1/1/2026 1200")),
            Err(KeeperError::InvalidInput(_))
        ));
    }

    #[test]
    fn storage_lines() {
        let todo = Task::todo("read book").unwrap().with_done(true);
        assert_eq!(todo.to_line(), "T | 1 | read book");

        let deadline = Task::deadline("submit", ts("1/1/2026 1200")).unwrap();
        assert_eq!(deadline.to_line(), "D | 0 | submit | 01/01/2026 1200");

        let event = Task::event("camp", ts("2/3/2026 0800"), ts("4/3/2026 1730")).unwrap();
        assert_eq!(
            event.to_line(),
            "E | 0 | camp | 02/03/2026 0800 | 04/03/2026 1730"
        );
    }

    #[test]
    fn stored_task_renders_identically() {
        let tasks = [
            Task::todo("read book").unwrap(),
            Task::deadline("submit", ts("1/1/2026 1200"))
                .unwrap()
                .with_done(true),
            Task::event("camp", ts("2/3/2026 0800"), ts("4/3/2026 1730")).unwrap(),
        ];
        for task in tasks {
            let back = Task::from_line(&task.to_line()).unwrap();
            assert_eq!(back.render(), task.render());
            assert_eq!(back, task);
        }
    }

    #[test]
    fn from_line_accepts_unpadded_dates() {
        let task = Task::from_line("D | 0 | submit | 1/1/2026 1200").unwrap();
        assert_eq!(task.kind(), TaskKind::Deadline);
    }

    #[test]
    fn from_line_rejects_corruption() {
        assert_eq!(
            Task::from_line("X | 0 | what"),
            Err(LineError::UnknownKind("X".into()))
        );
        assert_eq!(
            Task::from_line("T | 0"),
            Err(LineError::FieldCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Task::from_line("D | 0 | submit"),
            Err(LineError::FieldCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Task::from_line("T | yes | read"),
            Err(LineError::InvalidFlag("yes".into()))
        );
        assert!(matches!(
            Task::from_line("D | 0 | submit | someday"),
            Err(LineError::InvalidRecord(_))
        ));
        assert!(matches!(
            Task::from_line("E | 0 | camp | 2/1/2026 1200 | 1/1/2026 1200"),
            Err(LineError::InvalidRecord(_))
        ));
    }

    #[test]
    fn matches_is_case_insensitive() {
        let task = Task::todo("Read BOOK").unwrap();
        assert!(task.matches("book"));
        assert!(task.matches("read b"));
        assert!(!task.matches("magazine"));
    }
}
