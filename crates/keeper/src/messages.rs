//! Response texts shown to the user.
//!
//! The keeper is grumpy but accurate: every confirmation names the record
//! it touched and, where the size changed, the new count.

use keeper_core::Record;

pub const WELCOME: &str = "Oh great. You're back.\nWhat disaster are we managing today?";

pub const FAREWELL: &str = "Finally. Peace and quiet.\nTry not to create more tasks while I'm gone.";

pub const ERROR_PREFIX: &str = "Wow. That didn't work.";

/// `1 task`, `2 tasks`.
pub fn count(size: usize, noun: &str) -> String {
    if size == 1 {
        format!("{size} {noun}")
    } else {
        format!("{size} {noun}s")
    }
}

pub fn listing<R: Record>(rendered: &str) -> String {
    format!("Here's the chaos in your {} list:\n{rendered}", R::NOUN)
}

pub fn added<R: Record>(record: &R, size: usize) -> String {
    format!(
        "Fine. I've added this to your never-ending list:\n  {}\nYou now have {}. Impressive. Truly.",
        record.render(),
        count(size, R::NOUN)
    )
}

pub fn deleted<R: Record>(record: &R, size: usize) -> String {
    format!(
        "One less thing to ignore:\n  {}\nYou're down to {}. Progress? Maybe.",
        record.render(),
        count(size, R::NOUN)
    )
}

pub fn marked<R: Record>(record: &R) -> String {
    format!(
        "Oh wow, you actually finished something?\n  {}",
        record.render()
    )
}

pub fn unmarked<R: Record>(record: &R) -> String {
    format!("Changed your mind already?\n  {}", record.render())
}

pub fn found(rendered: &str) -> String {
    format!("You searched. Here's what matched your questionable memory:\n{rendered}")
}

pub fn nothing_found<R: Record>(keyword: &str) -> String {
    format!("No {} matches \"{keyword}\". Shocking.", R::NOUN)
}

/// Appended to a load warning when the bad file was moved aside.
pub fn quarantined(to: &str) -> String {
    format!("The unreadable file was moved to {to}; starting fresh before it infects me.")
}
