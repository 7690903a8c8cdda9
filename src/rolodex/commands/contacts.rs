//! Contact-level commands: add, rename, delete, list and search.

use crate::book::AddressBook;
use crate::commands::helpers::{cloned, plural};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::record::Record;

/// Adds a contact with one phone, or adds the phone to an existing contact.
///
/// A phone the contact already has is not appended twice.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let mut record = book
        .find_record(name)
        .cloned()
        .unwrap_or_else(|| Record::new(name));

    if record.find_phone(phone).is_some() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact {} already has number {}",
            name, phone
        ))));
    }

    record.add_phone(phone)?;
    book.add_record(record);
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Contact {} with number {} has been added",
        name, phone
    ))))
}

/// Renames a contact. Refuses to overwrite another contact.
pub fn rename(book: &mut AddressBook, old_name: &str, new_name: &str) -> Result<CmdResult> {
    if !book.contains(old_name) {
        return Err(RolodexError::ContactNotFound(old_name.to_string()));
    }
    if old_name != new_name && book.contains(new_name) {
        return Err(RolodexError::Api(format!(
            "A contact named {} already exists",
            new_name
        )));
    }
    book.rename_record(old_name, new_name)?;
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Name changed from {} to {}",
        old_name, new_name
    ))))
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete_record(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::modified()
        .with_listed_records(vec![removed])
        .with_message(CmdMessage::success(format!("Contact {} was deleted", name))))
}

pub fn list_all(book: &AddressBook) -> Result<CmdResult> {
    let result = CmdResult::default().with_listed_records(book.iter().cloned().collect());
    if book.is_empty() {
        return Ok(result.with_message(CmdMessage::warning("The contact list is empty")));
    }
    Ok(result)
}

pub fn search(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let found = cloned(book.search(query));
    let message = if found.is_empty() {
        CmdMessage::warning(format!("No contacts match '{}'", query))
    } else {
        CmdMessage::info(format!(
            "Found {} contact{} matching '{}'",
            found.len(),
            plural(found.len()),
            query
        ))
    };
    Ok(CmdResult::default()
        .with_listed_records(found)
        .with_message(message))
}
