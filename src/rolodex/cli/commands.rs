//! # CLI Layer
//!
//! This module is **one possible UI client** for rolodex, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, loads config, builds the API
//! - `handle_*()`: Per-command handlers that call the API and format output
//!
//! Output formatting lives in `print.rs`.

use super::print::{print_config, print_messages, print_records, print_tag_groups, print_upcoming};
use super::setup::{init_tracing, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::{ConfigAction, RolodexApi};
use rolodex::commands::{CmdResult, RolodexPaths};
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the platform data directory; used by tests and portable setups.
pub const HOME_ENV: &str = "ROLODEX_HOME";

struct AppContext {
    api: RolodexApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, phone }) => {
            let result = ctx.api.add_contact(&name, &phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::Rename { old_name, new_name }) => {
            let result = ctx.api.rename_contact(&old_name, &new_name)?;
            print_messages(&result.messages);
        }
        Some(Commands::Delete { name }) => {
            let result = ctx.api.delete_contact(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::All) | None => handle_listing(ctx.api.all_contacts()?),
        Some(Commands::Search { query }) => handle_listing(ctx.api.search_contacts(&query)?),
        Some(Commands::Phone { name }) => handle_phones(ctx.api.show_phones(&name)?),
        Some(Commands::EditPhone {
            name,
            old_phone,
            new_phone,
        }) => {
            let result = ctx.api.edit_phone(&name, &old_phone, &new_phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::RemovePhone { name, phone }) => {
            let result = ctx.api.remove_phone(&name, &phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::AddNote { name, text }) => {
            let result = ctx.api.add_note(&name, &text.join(" "))?;
            print_messages(&result.messages);
        }
        Some(Commands::EditNote { name, text }) => {
            let result = ctx.api.edit_note(&name, &text.join(" "))?;
            print_messages(&result.messages);
        }
        Some(Commands::RemoveNote { name }) => {
            let result = ctx.api.remove_note(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::ShowNote { name }) => {
            let result = ctx.api.show_note(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::AddBirthday { name, birthday }) => {
            let result = ctx.api.set_birthday(&name, &birthday)?;
            print_messages(&result.messages);
        }
        Some(Commands::ShowBirthday { name }) => {
            let result = ctx.api.show_birthday(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::Birthdays { days }) => {
            let result = ctx.api.upcoming_birthdays(days)?;
            print_messages(&result.messages);
            print_upcoming(&result.upcoming);
        }
        Some(Commands::AddEmail { name, email }) => {
            let result = ctx.api.set_email(&name, &email)?;
            print_messages(&result.messages);
        }
        Some(Commands::EditEmail { name, email }) => {
            let result = ctx.api.edit_email(&name, &email)?;
            print_messages(&result.messages);
        }
        Some(Commands::RemoveEmail { name }) => {
            let result = ctx.api.remove_email(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::AddAddress { name, address }) => {
            let result = ctx.api.set_address(&name, &address.join(" "))?;
            print_messages(&result.messages);
        }
        Some(Commands::EditAddress { name, address }) => {
            let result = ctx.api.edit_address(&name, &address.join(" "))?;
            print_messages(&result.messages);
        }
        Some(Commands::RemoveAddress { name }) => {
            let result = ctx.api.remove_address(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::AddTag { name, tags }) => {
            let result = ctx.api.add_tags(&name, &tags)?;
            print_messages(&result.messages);
        }
        Some(Commands::RemoveTag { name, tag }) => {
            let result = ctx.api.remove_tag(&name, &tag)?;
            print_messages(&result.messages);
        }
        Some(Commands::ShowTags { name }) => {
            let result = ctx.api.show_tags(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::SearchTag { tag }) => handle_listing(ctx.api.search_by_tag(&tag)?),
        Some(Commands::SortNotes) => {
            let result = ctx.api.group_by_tag()?;
            print_tag_groups(&result.tag_groups);
            print_messages(&result.messages);
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value)?,
    }
    Ok(())
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Config("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = RolodexConfig::load(&data_dir)?;
    debug!(dir = %data_dir.display(), file = %config.data_file, "using data directory");

    let store = FileStore::new(data_dir.clone()).with_data_file(&config.data_file);
    let paths = RolodexPaths { data_dir };
    let api = RolodexApi::new(store, paths, config)?;
    Ok(AppContext { api })
}

fn handle_listing(result: CmdResult) {
    print_messages(&result.messages);
    print_records(&result.listed_records);
}

fn handle_phones(result: CmdResult) {
    for record in &result.listed_records {
        for phone in record.phones() {
            println!("{}", phone);
        }
    }
    print_messages(&result.messages);
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
