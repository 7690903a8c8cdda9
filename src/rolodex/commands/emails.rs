use crate::book::AddressBook;
use crate::commands::helpers::require_record_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

pub fn set(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.set_email(email)?;
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Email {} added to contact {}",
        email, name
    ))))
}

pub fn edit(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.edit_email(email)?;
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Email for contact {} changed to {}",
        name, email
    ))))
}

/// Removing an email that is not set is reported as a warning, not an error.
pub fn remove(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    match require_record_mut(book, name)?.remove_email() {
        Ok(()) => Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
            "Email removed for contact {}",
            name
        )))),
        Err(e @ RolodexError::AlreadyEmpty(_)) => {
            Ok(CmdResult::default().with_message(CmdMessage::warning(e.to_string())))
        }
        Err(e) => Err(e),
    }
}
