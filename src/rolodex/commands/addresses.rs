use crate::book::AddressBook;
use crate::commands::helpers::require_record_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn set(book: &mut AddressBook, name: &str, address: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.set_address(address);
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Address added to contact {}",
        name
    ))))
}

pub fn edit(book: &mut AddressBook, name: &str, address: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.edit_address(address);
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Address updated for contact {}",
        name
    ))))
}

pub fn remove(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    require_record_mut(book, name)?.remove_address();
    Ok(CmdResult::modified().with_message(CmdMessage::success(format!(
        "Address removed from contact {}",
        name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn address_lifecycle() {
        let mut book = BookFixture::new().with_contact("Ann", "0501234567").book;
        set(&mut book, "Ann", "Main st. 1").unwrap();
        edit(&mut book, "Ann", "Side st. 2").unwrap();
        assert_eq!(book.find_record("Ann").unwrap().address(), Some("Side st. 2"));

        remove(&mut book, "Ann").unwrap();
        remove(&mut book, "Ann").unwrap();
        assert_eq!(book.find_record("Ann").unwrap().address(), None);
    }

    #[test]
    fn unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            set(&mut book, "Ann", "x").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }
}
