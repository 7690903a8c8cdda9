//! # Address Book
//!
//! [`AddressBook`] owns every [`Record`] and is the only place records are
//! keyed by name. It keeps exactly one record per distinct name and preserves
//! insertion order, which is the order every query returns results in.
//!
//! ## Ordering
//!
//! - `add_record` on a new name appends.
//! - `add_record` on an existing name replaces the record in place.
//! - `rename_record` removes the old entry and appends under the new name.
//!
//! ## Birthday Window
//!
//! A birthday is projected onto the current year, or onto next year when that
//! date has already passed. A record is upcoming when the projected date is
//! between today and `today + window_days` inclusive. Results come soonest
//! first; records with the same distance keep book order. February 29
//! birthdays are celebrated on February 28 in non-leap years.
//!
//! Records live in a `Vec` in book order, with a name index beside it for
//! lookups. The raw storage is never handed out mutably; callers go through
//! the operations below so keys cannot drift from record names.

use crate::error::{Result, RolodexError};
use crate::record::Record;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
    /// Name to position in `records`, kept in step by every mutation.
    index: HashMap<String, usize>,
}

/// A record whose birthday falls inside the requested window.
#[derive(Debug, Clone, Copy)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    /// The birthday as it falls in the window (this year or next).
    pub date: NaiveDate,
    pub days_until: i64,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Inserts `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(pos) => {
                debug!(name = %record.name(), "replacing record");
                self.records[pos] = record;
            }
            None => {
                debug!(name = %record.name(), "adding record");
                self.index.insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|pos| &self.records[pos])
    }

    /// Mutable access to one record's fields. The name can only change through
    /// [`rename_record`](Self::rename_record).
    pub fn find_record_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        let pos = self.position(name)?;
        Some(RecordMut(&mut self.records[pos]))
    }

    /// Removes and returns the record. An absent name is not an error here.
    pub fn delete_record(&mut self, name: &str) -> Option<Record> {
        let pos = self.position(name)?;
        debug!(name, "deleting record");
        Some(self.remove_at(pos))
    }

    /// Moves a record to a new name. An existing record under `new_name` is
    /// replaced.
    pub fn rename_record(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let pos = self
            .position(old_name)
            .ok_or_else(|| RolodexError::ContactNotFound(old_name.to_string()))?;
        let mut record = self.remove_at(pos);
        record.rename(new_name);

        if let Some(target) = self.position(new_name) {
            warn!(old_name, new_name, "rename target exists, replacing it");
            self.remove_at(target);
        }
        debug!(old_name, new_name, "renamed record");
        self.add_record(record);
        Ok(())
    }

    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.matches(query)).collect()
    }

    pub fn search_by_tag(&self, tag: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.has_tag(tag)).collect()
    }

    /// Records grouped under each of their tags, tags in lexicographic order.
    pub fn group_by_tag(&self) -> BTreeMap<String, Vec<&Record>> {
        let mut groups: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
        for record in &self.records {
            for tag in record.tags() {
                groups.entry(tag.to_string()).or_default().push(record);
            }
        }
        groups
    }

    /// Records with a birthday in the next `window_days` days, counted from the
    /// local date at call time.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<&Record> {
        let today = Local::now().date_naive();
        self.upcoming_birthdays_from(today, window_days)
            .into_iter()
            .map(|u| u.record)
            .collect()
    }

    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday<'_>> {
        let mut upcoming: Vec<_> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let mut date = birthday_in_year(birthday, today.year());
                if date < today {
                    date = birthday_in_year(birthday, today.year() + 1);
                }
                let days_until = (date - today).num_days();
                (0..=i64::from(window_days))
                    .contains(&days_until)
                    .then_some(UpcomingBirthday {
                        record,
                        date,
                        days_until,
                    })
            })
            .collect();
        upcoming.sort_by_key(|u| u.days_until);
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Removes the record at `pos` and shifts the positions of those after it.
    fn remove_at(&mut self, pos: usize) -> Record {
        let record = self.records.remove(pos);
        self.index.remove(record.name().as_str());
        for (i, later) in self.records.iter().enumerate().skip(pos) {
            if let Some(slot) = self.index.get_mut(later.name().as_str()) {
                *slot = i;
            }
        }
        record
    }
}

/// Mutable handle to a record inside an [`AddressBook`].
///
/// Derefs to [`Record`] for reads and exposes every field mutator except
/// `rename`.
pub struct RecordMut<'a>(&'a mut Record);

impl std::ops::Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        &*self.0
    }
}

impl RecordMut<'_> {
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.0.add_phone(raw)
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<()> {
        self.0.remove_phone(value)
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        self.0.edit_phone(old, new)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.0.set_birthday(raw)
    }

    pub fn set_email(&mut self, raw: &str) -> Result<()> {
        self.0.set_email(raw)
    }

    pub fn edit_email(&mut self, raw: &str) -> Result<()> {
        self.0.edit_email(raw)
    }

    pub fn remove_email(&mut self) -> Result<()> {
        self.0.remove_email()
    }

    pub fn set_address(&mut self, text: impl Into<String>) {
        self.0.set_address(text)
    }

    pub fn edit_address(&mut self, text: impl Into<String>) {
        self.0.edit_address(text)
    }

    pub fn remove_address(&mut self) {
        self.0.remove_address()
    }

    pub fn add_note(&mut self, text: impl Into<String>) {
        self.0.add_note(text)
    }

    pub fn edit_note(&mut self, text: impl Into<String>) {
        self.0.edit_note(text)
    }

    pub fn remove_note(&mut self) {
        self.0.remove_note()
    }

    pub fn add_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.0.add_tags(tags)
    }

    pub fn remove_tag(&mut self, raw: &str) -> bool {
        self.0.remove_tag(raw)
    }
}

fn birthday_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birthday)
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            if book.contains(record.name().as_str()) {
                warn!(
                    name = %record.name(),
                    "duplicate contact in snapshot, keeping the last one"
                );
            }
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}
