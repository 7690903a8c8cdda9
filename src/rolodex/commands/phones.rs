use crate::book::AddressBook;
use crate::commands::helpers::{require_record, require_record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_record(book, name)?;
    let result = CmdResult::default().with_listed_records(vec![record.clone()]);
    if record.phones().is_empty() {
        return Ok(result.with_message(CmdMessage::warning(
            "No phone numbers found for this contact",
        )));
    }
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.edit_phone(old, new)?;
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Contact {} updated: {} -> {}",
        name, old, new
    ))))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.remove_phone(phone)?;
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Phone number {} removed from contact {}",
        phone, name
    ))))
}
