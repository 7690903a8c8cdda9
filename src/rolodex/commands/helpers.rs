use crate::book::{AddressBook, RecordMut};
use crate::error::{Result, RolodexError};
use crate::record::Record;

pub fn require_record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find_record(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
}

pub fn require_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<RecordMut<'a>> {
    book.find_record_mut(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
}

pub fn cloned(records: Vec<&Record>) -> Vec<Record> {
    records.into_iter().cloned().collect()
}

/// `"s"` when `count` is not one.
pub fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn missing_contact_is_not_found() {
        let mut book = AddressBook::new();
        assert_eq!(
            require_record(&book, "Ann").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert!(require_record_mut(&mut book, "Ann").is_err());
        book.add_record(Record::new("Ann"));
        assert!(require_record(&book, "Ann").is_ok());
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}
