//! Keyword enums for the keeper system.
//!
//! Each keyword enum has:
//! - `as_str()` and a `Display` impl
//! - `parse()` doing a case-sensitive exact match (no fallback variant)
//! - `ALL`, the closed set in declaration order

use std::fmt;

use crate::datetime::INPUT_PATTERN;

// ---------------------------------------------------------------------------
// Macro: defines a closed enum keyed by exact keyword strings.
// ---------------------------------------------------------------------------
macro_rules! define_keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident,
        variants: [
            $( $(#[$vmeta:meta])* ($variant:ident, $str:literal) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Returns the keyword.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $str, )+
                }
            }

            /// Exact, case-sensitive keyword match.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $( $str => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_keyword_enum!(
    /// Top-level target of a command.
    Category,
    variants: [
        (Task, "task"),
        (Contact, "contact"),
    ]
);

define_keyword_enum!(
    /// The verb within a category.
    CommandType,
    variants: [
        (List, "list"),
        (Mark, "mark"),
        (Unmark, "unmark"),
        (Delete, "delete"),
        (Todo, "todo"),
        (Deadline, "deadline"),
        (Event, "event"),
        (Find, "find"),
        (Add, "add"),
    ]
);

impl Category {
    /// Command types accepted by this category.
    pub fn commands(&self) -> &'static [CommandType] {
        use CommandType::*;
        match self {
            Self::Task => &[List, Mark, Unmark, Delete, Todo, Deadline, Event, Find],
            Self::Contact => &[List, Add, Delete, Find],
        }
    }

    /// Returns `true` if `command` is valid for this category.
    pub fn accepts(&self, command: CommandType) -> bool {
        self.commands().contains(&command)
    }
}

impl CommandType {
    /// Usage text for the command's arguments.
    pub fn usage(&self, category: Category) -> String {
        let usage = match (category, self) {
            (_, Self::List) => "list",
            (Category::Task, Self::Mark) => "task mark NUMBER",
            (Category::Task, Self::Unmark) => "task unmark NUMBER",
            (Category::Task, Self::Delete) => "task delete NUMBER",
            (Category::Contact, Self::Delete) => "contact delete NUMBER",
            (_, Self::Todo) => "task todo DESCRIPTION",
            (_, Self::Deadline) => {
                return format!("task deadline DESCRIPTION /by {INPUT_PATTERN}");
            }
            (_, Self::Event) => {
                return format!(
                    "task event DESCRIPTION /from {INPUT_PATTERN} /to {INPUT_PATTERN}"
                );
            }
            (Category::Task, Self::Find) => "task find KEYWORD",
            (Category::Contact, Self::Find) => "contact find KEYWORD",
            (_, Self::Add) => "contact add /name NAME /phone PHONE /email EMAIL",
            (Category::Contact, Self::Mark | Self::Unmark) => "",
        };
        usage.to_owned()
    }
}

/// Kind of task, tagged by one letter in display and storage forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
}

impl TaskKind {
    /// One-letter tag: `T`, `D` or `E`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline => "D",
            Self::Event => "E",
        }
    }

    /// Looks up a kind by its tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "T" => Some(Self::Todo),
            "D" => Some(Self::Deadline),
            "E" => Some(Self::Event),
            _ => None,
        }
    }

    /// Number of fields in this kind's storage line.
    pub fn field_count(&self) -> usize {
        match self {
            Self::Todo => 3,
            Self::Deadline => 4,
            Self::Event => 5,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        })
    }
}
