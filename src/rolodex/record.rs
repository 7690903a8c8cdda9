//! A single contact.
//!
//! Every mutator re-validates its input, so a `Record` can only ever hold
//! valid phones, a valid birthday and a valid email. The name is the
//! record's identity inside an [`AddressBook`](crate::book::AddressBook); it is
//! changed through [`AddressBook::rename_record`](crate::book::AddressBook::rename_record),
//! which keeps the book's keys in step.

use crate::error::{Result, RolodexError};
use crate::fields::{Birthday, Email, Name, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

const NOT_SET: &str = "Not set";
const RULE: &str = "..................................................";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    email: Option<Email>,
    #[serde(default)]
    note: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
            email: None,
            note: String::new(),
            address: None,
            tags: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    // --- Phones ---

    /// Appends a phone. Duplicates are not filtered here.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.phones.push(raw.parse()?);
        Ok(())
    }

    /// Removes the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> Result<()> {
        let pos = self.phone_position(value)?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self.phone_position(old)?;
        self.phones[pos] = new.parse()?;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == value)
    }

    fn phone_position(&self, value: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == value)
            .ok_or_else(|| RolodexError::PhoneNotFound(value.to_string()))
    }

    // --- Birthday, email, address ---

    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(raw.parse()?);
        Ok(())
    }

    pub fn set_email(&mut self, raw: &str) -> Result<()> {
        self.email = Some(raw.parse()?);
        Ok(())
    }

    pub fn edit_email(&mut self, raw: &str) -> Result<()> {
        self.set_email(raw)
    }

    pub fn remove_email(&mut self) -> Result<()> {
        match self.email.take() {
            Some(_) => Ok(()),
            None => Err(RolodexError::AlreadyEmpty("email")),
        }
    }

    pub fn set_address(&mut self, text: impl Into<String>) {
        self.address = Some(text.into());
    }

    pub fn edit_address(&mut self, text: impl Into<String>) {
        self.set_address(text);
    }

    pub fn remove_address(&mut self) {
        self.address = None;
    }

    // --- Note ---

    pub fn add_note(&mut self, text: impl Into<String>) {
        self.note = text.into();
    }

    pub fn edit_note(&mut self, text: impl Into<String>) {
        self.add_note(text);
    }

    pub fn remove_note(&mut self) {
        self.note.clear();
    }

    // --- Tags ---

    pub fn add_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.tags.extend(tags.into_iter().map(|t| Tag::new(t.as_ref())));
    }

    pub fn has_tag(&self, raw: &str) -> bool {
        self.tags.contains(&Tag::new(raw))
    }

    /// Discards a tag (case-insensitively). Returns whether it was present.
    pub fn remove_tag(&mut self, raw: &str) -> bool {
        self.tags.remove(&Tag::new(raw))
    }

    /// Tags sorted and comma-joined, or `"No tags"`.
    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            return "No tags".to_string();
        }
        self.tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = Name::new(new_name);
    }

    /// Case-insensitive substring match over name, phones, email and note.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.as_str().to_lowercase().contains(&query)
            || self.phones.iter().any(|p| p.as_str().contains(&query))
            || self
                .email
                .as_ref()
                .is_some_and(|e| e.as_str().to_lowercase().contains(&query))
            || self.note.to_lowercase().contains(&query)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let or_unset = |value: Option<String>| value.unwrap_or_else(|| NOT_SET.to_string());

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Contact name: {}", self.name)?;
        writeln!(f, "Phones: {}", phones)?;
        writeln!(f, "Birthday: {}", or_unset(self.birthday.map(|b| b.to_string())))?;
        writeln!(f, "Email: {}", or_unset(self.email.as_ref().map(Email::to_string)))?;
        let note = (!self.note.is_empty()).then(|| self.note.clone());
        writeln!(f, "Note: {}", or_unset(note))?;
        writeln!(f, "Address: {}", or_unset(self.address.clone()))?;
        let tags = (!self.tags.is_empty()).then(|| self.tags_display());
        writeln!(f, "Tags: {}", or_unset(tags))?;
        write!(f, "{}", RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn john() -> Record {
        let mut record = Record::new("John");
        record.add_phone("380501234567").unwrap();
        record
    }

    #[test]
    fn round_trips_every_field() {
        let mut record = Record::new("Ann");
        record.add_phone("380501234567").unwrap();
        record.set_email("a@b.com").unwrap();
        record.set_birthday("01.01.2000").unwrap();
        record.add_tags(["Friend"]);

        assert_eq!(record.phones()[0].as_str(), "380501234567");
        assert_eq!(record.email().unwrap().as_str(), "a@b.com");
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.2000");
        let tags: Vec<&str> = record.tags().iter().map(Tag::as_str).collect();
        assert_eq!(tags, vec!["friend"]);
    }

    #[test]
    fn add_phone_validates_and_keeps_duplicates() {
        let mut record = john();
        assert_eq!(
            record.add_phone("12").unwrap_err().kind(),
            ErrorKind::Validation
        );
        record.add_phone("380501234567").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn remove_phone_takes_first_match() {
        let mut record = john();
        record.add_phone("0501112233").unwrap();
        record.add_phone("380501234567").unwrap();
        record.remove_phone("380501234567").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0501112233", "380501234567"]);
    }

    #[test]
    fn remove_missing_phone_is_not_found() {
        let mut record = john();
        let err = record.remove_phone("000000000").unwrap_err();
        assert!(matches!(err, RolodexError::PhoneNotFound(ref p) if p == "000000000"));
    }

    #[test]
    fn edit_phone_preserves_position() {
        let mut record = john();
        record.add_phone("0501112233").unwrap();
        record.edit_phone("380501234567", "0990000000").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0990000000", "0501112233"]);
    }

    #[test]
    fn edit_phone_errors() {
        let mut record = john();
        assert_eq!(
            record.edit_phone("111111111", "0990000000").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            record.edit_phone("380501234567", "bad").unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(record.phones()[0].as_str(), "380501234567");
    }

    #[test]
    fn find_phone_is_exact() {
        let record = john();
        assert!(record.find_phone("380501234567").is_some());
        assert!(record.find_phone("38050").is_none());
    }

    #[test]
    fn remove_email_twice_is_already_empty() {
        let mut record = john();
        record.set_email("john@example.com").unwrap();
        record.remove_email().unwrap();
        assert!(matches!(
            record.remove_email(),
            Err(RolodexError::AlreadyEmpty("email"))
        ));
    }

    #[test]
    fn invalid_email_leaves_previous_value() {
        let mut record = john();
        record.set_email("john@example.com").unwrap();
        assert!(record.set_email("not-an-email").is_err());
        assert_eq!(record.email().unwrap().as_str(), "john@example.com");
    }

    #[test]
    fn note_and_address_overwrite_and_clear() {
        let mut record = john();
        record.add_note("first");
        record.edit_note("second");
        assert_eq!(record.note(), "second");
        record.remove_note();
        record.remove_note();
        assert_eq!(record.note(), "");

        record.set_address("Kyiv");
        record.edit_address("Lviv");
        assert_eq!(record.address(), Some("Lviv"));
        record.remove_address();
        record.remove_address();
        assert_eq!(record.address(), None);
    }

    #[test]
    fn tags_are_lowercased_and_deduplicated() {
        let mut record = john();
        record.add_tags(["Work", "WORK", "family"]);
        record.add_tags(["work"]);
        assert_eq!(record.tags().len(), 2);
        assert!(record.has_tag("FAMILY"));
        assert_eq!(record.tags_display(), "family, work");
    }

    #[test]
    fn remove_absent_tag_is_noop() {
        let mut record = john();
        record.add_tags(["work"]);
        assert!(!record.remove_tag("gym"));
        assert_eq!(record.tags().len(), 1);
        assert!(record.remove_tag("Work"));
        assert!(record.tags().is_empty());
        assert_eq!(record.tags_display(), "No tags");
    }

    #[test]
    fn matches_is_case_insensitive() {
        let mut record = Record::new("Johnny");
        assert!(record.matches("john"));
        assert!(record.matches("OHN"));

        let mut colleague = Record::new("Bob");
        colleague.add_note("met John at work");
        assert!(colleague.matches("john"));

        record.set_email("J.Doe@Mail.com").unwrap();
        assert!(record.matches("doe@mail"));
        record.add_phone("380501234567").unwrap();
        assert!(record.matches("0501"));
        assert!(!record.matches("xyz"));
    }

    #[test]
    fn display_marks_unset_fields() {
        let rendered = Record::new("Ann").to_string();
        assert!(rendered.contains("Contact name: Ann"));
        assert!(rendered.contains("Phones: No phones"));
        assert!(rendered.contains("Birthday: Not set"));
        assert!(rendered.contains("Email: Not set"));
        assert!(rendered.contains("Note: Not set"));
        assert!(rendered.contains("Address: Not set"));
        assert!(rendered.contains("Tags: Not set"));
    }

    #[test]
    fn display_includes_set_fields() {
        let mut record = john();
        record.add_phone("0501112233").unwrap();
        record.set_birthday("15.06.1990").unwrap();
        record.set_email("john@example.com").unwrap();
        record.add_note("likes tea");
        record.set_address("Main st. 1");
        record.add_tags(["b", "a"]);

        let rendered = record.to_string();
        assert!(rendered.contains("Phones: 380501234567, 0501112233"));
        assert!(rendered.contains("Birthday: 15.06.1990"));
        assert!(rendered.contains("Email: john@example.com"));
        assert!(rendered.contains("Note: likes tea"));
        assert!(rendered.contains("Address: Main st. 1"));
        assert!(rendered.contains("Tags: a, b"));
    }

    #[test]
    fn serialization_roundtrip() {
        let mut record = john();
        record.set_birthday("29.02.2000").unwrap();
        record.add_tags(["x"]);
        let json = serde_json::to_string(&record).unwrap();
        let loaded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"X","phones":["abc"],"birthday":null,"email":null,"note":"","address":null,"tags":[]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
