use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lernwerk", version, about = "Edit learning units and discuss them")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Id of the current user
    #[arg(long, default_value = "anonymous")]
    pub user_id: String,

    /// Display name of the current user (defaults to the id)
    #[arg(long)]
    pub user_name: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new learning unit
    New {
        title: String,
        #[command(flatten)]
        metadata: MetadataArgs,
    },
    /// List all learning units, most recently changed first
    List,
    /// Show a learning unit together with its comments
    Show { unit: String },
    /// Replace the basic metadata of a learning unit
    Meta {
        unit: String,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        metadata: MetadataArgs,
    },
    /// Replace the explanation of a learning unit
    Explain { unit: String, text: String },
    /// Replace the notes of a learning unit
    Notes { unit: String, text: String },
    /// Manage the presentation file of a learning unit
    #[command(subcommand)]
    Presentation(PresentationCommand),
    /// Manage comments
    #[command(subcommand)]
    Comment(CommentCommand),
    /// Manage text snippets of a learning unit
    #[command(subcommand)]
    Snippet(SnippetCommand),
}

#[derive(clap::Args)]
pub struct MetadataArgs {
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub grade_level: Option<String>,
    /// Duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Subcommand)]
pub enum PresentationCommand {
    /// Attach the metadata of an uploaded presentation file
    Attach {
        unit: String,
        file_name: String,
        #[arg(long, default_value = "application/pdf")]
        media_type: String,
        #[arg(long, default_value_t = 0)]
        size: u64,
    },
    /// Remove the presentation file
    Detach { unit: String },
}

/// The context of a comment is usually the id of a learning unit.
#[derive(Subcommand)]
pub enum CommentCommand {
    /// Add a new comment
    Add { context: String, text: String },
    /// List the comments of a context with their priority
    List {
        context: String,
        /// Print the comments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle the "processed" flag
    Process { context: String, id: String },
    /// Toggle the "for discussion" flag
    Discuss { context: String, id: String },
    /// Set the resolution of a comment
    Resolve {
        context: String,
        id: String,
        text: String,
    },
    /// Delete one of your own comments
    Delete { context: String, id: String },
}

#[derive(Subcommand)]
pub enum SnippetCommand {
    /// Add a text snippet
    Add { unit: String, text: String },
    /// Remove a text snippet
    Remove { unit: String, id: String },
    /// Copy a text snippet to the clipboard
    Copy { unit: String, id: String },
}
