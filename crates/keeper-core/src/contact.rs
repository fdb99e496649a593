//! Contact records.

use crate::error::Result;
use crate::line::{LineError, expect_fields, join_fields, split_fields};
use crate::record::Record;
use crate::validation;

/// A person with an eight-digit phone number and an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Creates a contact, validating name, then phone, then email.
    pub fn new(name: &str, phone: &str, email: &str) -> Result<Self> {
        Ok(Self {
            name: validation::name(name)?,
            phone: validation::phone(phone)?,
            email: validation::email(email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Record for Contact {
    const NOUN: &'static str = "contact";
    const EMPTY_LISTING: &'static str = "No contacts in the list.";

    fn render(&self) -> String {
        format!(
            "Name: {} | Phone: {} | Email: {}",
            self.name, self.phone, self.email
        )
    }

    fn to_line(&self) -> String {
        join_fields(&[&self.name, &self.phone, &self.email])
    }

    fn from_line(line: &str) -> std::result::Result<Self, LineError> {
        let fields = split_fields(line);
        expect_fields(&fields, 3)?;
        Contact::new(fields[0], fields[1], fields[2])
            .map_err(|e| LineError::InvalidRecord(e.to_string()))
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
