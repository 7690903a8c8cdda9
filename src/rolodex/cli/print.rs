use colored::Colorize;
use rolodex::api::{BirthdayEntry, CmdMessage, MessageLevel};
use rolodex::config::{KEYS, RolodexConfig};
use rolodex::record::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", record);
    }
}

pub(super) fn print_upcoming(entries: &[BirthdayEntry]) {
    for entry in entries {
        let name = truncate_to_width(entry.record.name().as_str(), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let when = match entry.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        println!(
            "{}{}  {}  {}",
            name.bold(),
            " ".repeat(padding),
            entry.date.format("%d.%m.%Y"),
            when.dimmed()
        );
    }
}

pub(super) fn print_tag_groups(groups: &[(String, Vec<Record>)]) {
    for (i, (tag, records)) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Tag: {}", format!("#{}", tag).yellow());
        for record in records {
            let note = if record.note().is_empty() {
                "No note".dimmed().to_string()
            } else {
                record.note().to_string()
            };
            println!("- {}: {}", record.name(), note);
        }
    }
}

pub(super) fn print_config(config: &RolodexConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_to_width("Ann", NAME_WIDTH), "Ann");
    }

    #[test]
    fn long_names_are_cut_to_width() {
        let long = "Bartholomew Featherstonehaugh";
        let cut = truncate_to_width(long, 10);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        let cut = truncate_to_width("山田太郎さん", 7);
        assert_eq!(cut, "山田太…");
    }
}
