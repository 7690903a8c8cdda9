use crate::book::AddressBook;
use crate::commands::helpers::{require_record, require_record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, text: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.add_note(text);
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Note added to contact {}",
        name
    ))))
}

pub fn edit(book: &mut AddressBook, name: &str, text: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.edit_note(text);
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Note updated for contact {}",
        name
    ))))
}

pub fn remove(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.remove_note();
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Note removed from contact {}",
        name
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_record(book, name)?;
    let message = if record.note().is_empty() {
        CmdMessage::warning("Note not found")
    } else {
        CmdMessage::info(format!("Note for {}: {}", name, record.note()))
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn add_edit_remove_note() {
        let mut book = BookFixture::new().with_contact("Ann", "0501234567").book;
        add(&mut book, "Ann", "likes tea").unwrap();
        assert_eq!(book.find_record("Ann").unwrap().note(), "likes tea");
        edit(&mut book, "Ann", "likes coffee").unwrap();
        assert_eq!(book.find_record("Ann").unwrap().note(), "likes coffee");
        remove(&mut book, "Ann").unwrap();
        assert_eq!(book.find_record("Ann").unwrap().note(), "");
    }

    #[test]
    fn show_note() {
        let mut book = BookFixture::new().with_contact("Ann", "0501234567").book;
        let empty = show(&book, "Ann").unwrap();
        assert_eq!(empty.messages[0].level, MessageLevel::Warning);

        add(&mut book, "Ann", "likes tea").unwrap();
        let shown = show(&book, "Ann").unwrap();
        assert_eq!(shown.messages[0].content, "Note for Ann: likes tea");
    }

    #[test]
    fn unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            add(&mut book, "Ann", "x").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(show(&book, "Ann").unwrap_err().kind(), ErrorKind::NotFound);
    }
}
