// src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the notes service (overrides config)
    #[arg(short, long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, one page at a time
    List {
        /// 1-based page number
        #[arg(short, long, value_name = "PAGE", default_value_t = 1)]
        page: u32,

        /// Page size (overrides configured pageSize)
        #[arg(short, long, value_name = "LIMIT")]
        limit: Option<u32>,
    },

    /// View a single note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON instead of the text detail view
        #[arg(long)]
        json: bool,

        /// Render the note as HTML and open it in the browser
        #[arg(long)]
        open: bool,
    },

    /// Create a note through the interactive form
    Add {
        /// Pre-fill the title field
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// Pre-fill the content field
        #[arg(long, value_name = "CONTENT")]
        content: Option<String>,

        /// Attach an image file
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        /// Submit the pre-filled values directly, without prompting
        #[arg(long)]
        no_input: bool,
    },

    /// Edit an existing note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Replace the title field
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// Replace the content field
        #[arg(long, value_name = "CONTENT")]
        content: Option<String>,

        /// Attach an image file
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        /// Submit the pre-filled values directly, without prompting
        #[arg(long)]
        no_input: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show information about this application
    About,
}
