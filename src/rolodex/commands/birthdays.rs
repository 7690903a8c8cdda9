//! Birthday commands.
//!
//! `set` is the one mutation that creates a missing contact: adding a birthday
//! for an unknown name starts a new record with just that birthday.

use crate::book::AddressBook;
use crate::commands::helpers::{plural, require_record};
use crate::commands::{BirthdayEntry, CmdMessage, CmdResult};
use crate::error::Result;
use crate::record::Record;
use chrono::NaiveDate;

pub fn set(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    match book.find_record_mut(name) {
        Some(mut record) => record.set_birthday(raw)?,
        None => {
            let mut record = Record::new(name);
            record.set_birthday(raw)?;
            book.add_record(record);
        }
    }
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Birthday {} added to contact {}",
        raw, name
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_record(book, name)?;
    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("{}'s birthday is {}", name, birthday)),
        None => CmdMessage::warning("Birthday is not set for this contact"),
    };
    Ok(CmdResult::default().with_message(message))
}

/// Contacts whose birthday falls within `days` days of `today`.
pub fn upcoming(book: &AddressBook, today: NaiveDate, days: u32) -> Result<CmdResult> {
    let upcoming: Vec<BirthdayEntry> = book
        .upcoming_birthdays_from(today, days)
        .into_iter()
        .map(|u| BirthdayEntry {
            record: u.record.clone(),
            date: u.date,
            days_until: u.days_until,
        })
        .collect();

    let message = if upcoming.is_empty() {
        CmdMessage::warning(format!(
            "No upcoming birthdays in the next {} day{}",
            days,
            plural(days as usize)
        ))
    } else {
        CmdMessage::info(format!(
            "{} upcoming birthday{} in the next {} day{}",
            upcoming.len(),
            plural(upcoming.len()),
            days,
            plural(days as usize)
        ))
    };
    Ok(CmdResult::default()
        .with_upcoming(upcoming)
        .with_message(message))
}
