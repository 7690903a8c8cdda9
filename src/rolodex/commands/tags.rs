//! Contact tagging commands.
//!
//! - `add`: tag a contact (idempotent, case-insensitive)
//! - `remove`: untag a contact, warning when the tag was not there
//! - `show`: list a contact's tags
//! - `search`: contacts carrying a tag
//! - `group`: every tag with the contacts carrying it, tags sorted

use crate::book::AddressBook;
use crate::commands::helpers::{cloned, plural, require_record, require_record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

pub fn add(book: &mut AddressBook, name: &str, tags: &[String]) -> Result<CmdResult> {
    if tags.iter().all(|t| t.trim().is_empty()) {
        return Err(RolodexError::Api("No tags specified".to_string()));
    }

    let mut record = require_record_mut(book, name)?;
    let before = record.tags().len();
    record.add_tags(tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()));
    let added = record.tags().len() - before;

    if added == 0 {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} already has tag{} [{}]",
            name,
            plural(tags.len()),
            tags.join(", ")
        ))));
    }
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Tags added to {}: {}",
        name,
        tags.join(", ")
    ))))
}

pub fn remove(book: &mut AddressBook, name: &str, tag: &str) -> Result<CmdResult> {
    let mut record = require_record_mut(book, name)?;
    if !record.remove_tag(tag) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Tag '{}' not found for {}",
            tag, name
        ))));
    }
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Tag '{}' removed from {}",
        tag, name
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_record(book, name)?;
    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Tags for {}: {}",
        name,
        record.tags_display()
    ))))
}

pub fn search(book: &AddressBook, tag: &str) -> Result<CmdResult> {
    let found = cloned(book.search_by_tag(tag));
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No contacts found with tag '{}'",
            tag.to_lowercase()
        )));
    }
    Ok(result.with_listed_records(found))
}

pub fn group(book: &AddressBook) -> Result<CmdResult> {
    let groups: Vec<_> = book
        .group_by_tag()
        .into_iter()
        .map(|(tag, records)| (tag, cloned(records)))
        .collect();

    let mut result = CmdResult::default();
    if groups.is_empty() {
        result.add_message(CmdMessage::warning("No tags found in the address book"));
    }
    Ok(result.with_tag_groups(groups))
}
