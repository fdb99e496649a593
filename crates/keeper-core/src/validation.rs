//! Field validation rules shared by record constructors and the line codec.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{KeeperError, Result};

/// Phone numbers are exactly eight ASCII digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

/// A simple `local@domain` pattern.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap());

/// Character reserved by the storage line format.
const RESERVED: char = '|';

/// Trims a task description and checks it is storable.
pub fn description(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(KeeperError::InvalidInput(
            "the description cannot be empty".to_owned(),
        ));
    }
    if trimmed.contains(RESERVED) {
        return Err(KeeperError::InvalidInput(format!(
            "the description cannot contain '{RESERVED}'"
        )));
    }
    Ok(trimmed.to_owned())
}

/// Trims a contact name and checks it is storable.
pub fn name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(KeeperError::contact_field("name", trimmed, "cannot be empty"));
    }
    if trimmed.contains(RESERVED) {
        return Err(KeeperError::contact_field(
            "name",
            trimmed,
            format!("cannot contain '{RESERVED}'"),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Trims a phone number and checks it is exactly eight digits.
pub fn phone(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if !PHONE_RE.is_match(trimmed) {
        return Err(KeeperError::contact_field(
            "phone",
            trimmed,
            "must be exactly 8 digits",
        ));
    }
    Ok(trimmed.to_owned())
}

/// Trims an email address and checks it looks like `local@domain`.
pub fn email(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if !EMAIL_RE.is_match(trimmed) {
        return Err(KeeperError::contact_field(
            "email",
            trimmed,
            "must look like name@domain",
        ));
    }
    Ok(trimmed.to_owned())
}
