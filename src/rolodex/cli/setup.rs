use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version)]
#[command(about = "Command-line contact book with birthdays, notes and tags", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact, or another phone to an existing one
    #[command(display_order = 1)]
    Add { name: String, phone: String },

    /// Rename a contact
    #[command(alias = "edit-name", display_order = 2)]
    Rename { old_name: String, new_name: String },

    /// Delete a contact
    #[command(display_order = 3)]
    Delete { name: String },

    /// Show every contact
    #[command(display_order = 4)]
    All,

    /// Find contacts by name, phone, email or note
    #[command(display_order = 5)]
    Search { query: String },

    /// Show a contact's phones
    #[command(display_order = 10)]
    Phone { name: String },

    /// Replace one of a contact's phones
    #[command(display_order = 11)]
    EditPhone {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Remove one of a contact's phones
    #[command(display_order = 12)]
    RemovePhone { name: String, phone: String },

    /// Set a contact's note
    #[command(display_order = 20)]
    AddNote {
        name: String,
        /// Note words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Replace a contact's note
    #[command(display_order = 21)]
    EditNote {
        name: String,
        /// Note words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Clear a contact's note
    #[command(display_order = 22)]
    RemoveNote { name: String },

    /// Show a contact's note
    #[command(display_order = 23)]
    ShowNote { name: String },

    /// Set a birthday (DD.MM.YYYY), creating the contact if needed
    #[command(display_order = 30)]
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    #[command(display_order = 31)]
    ShowBirthday { name: String },

    /// List birthdays coming up
    #[command(display_order = 32)]
    Birthdays {
        /// Days ahead to look (defaults to the birthday-window setting)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Set a contact's email
    #[command(display_order = 40)]
    AddEmail { name: String, email: String },

    /// Replace a contact's email
    #[command(display_order = 41)]
    EditEmail { name: String, email: String },

    /// Clear a contact's email
    #[command(display_order = 42)]
    RemoveEmail { name: String },

    /// Set a contact's address
    #[command(display_order = 50)]
    AddAddress {
        name: String,
        /// Address words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        address: Vec<String>,
    },

    /// Replace a contact's address
    #[command(display_order = 51)]
    EditAddress {
        name: String,
        /// Address words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        address: Vec<String>,
    },

    /// Clear a contact's address
    #[command(display_order = 52)]
    RemoveAddress { name: String },

    /// Tag a contact
    #[command(display_order = 60)]
    AddTag {
        name: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove a tag from a contact
    #[command(display_order = 61)]
    RemoveTag { name: String, tag: String },

    /// Show a contact's tags
    #[command(display_order = 62)]
    ShowTags { name: String },

    /// List contacts carrying a tag
    #[command(display_order = 63)]
    SearchTag { tag: String },

    /// Show notes grouped by tag
    #[command(display_order = 64)]
    SortNotes,

    /// Get or set configuration
    #[command(display_order = 70)]
    Config {
        /// Configuration key (birthday-window, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Logs go to stderr so they never mix with command output.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "rolodex=debug" } else { "rolodex=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
