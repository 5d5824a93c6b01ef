use anyhow::Result;
use clap::Parser;
use lw_application::prelude as flows;
use lw_core::{entities::*, usecases};
use lw_db_memory::InMemoryDb;
use lw_gateways::{notify::ConsoleNotifier, report::learning_unit_report};
use std::io::{self, Write};

mod cli;
mod config;

use cli::{Cli, Command, CommentCommand, MetadataArgs, PresentationCommand, SnippetCommand};
use config::Config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;

    let document_file = cfg.store.document_file.clone();
    log::debug!("Using document file {}", document_file.display());
    let db = flows::load_document(&document_file)?;
    if run(cli, &cfg, &db)? {
        flows::save_document(db, &document_file)?;
    }
    Ok(())
}

fn metadata(title: String, args: MetadataArgs) -> BasicMetadata {
    let MetadataArgs {
        subject,
        grade_level,
        duration,
        tags,
    } = args;
    BasicMetadata {
        title,
        subject,
        grade_level,
        duration_minutes: duration,
        tags,
    }
}

fn comment_panel(cfg: &Config, user: &Author, context: String) -> flows::CommentPanel {
    flows::CommentPanel::new(context, user.clone()).with_thresholds(cfg.lifecycle)
}

fn print_comment_result(comment: Option<Comment>, id: &str) {
    match comment {
        Some(c) => println!(
            "{} zur Diskussion: {}, bearbeitet: {}",
            c.id,
            if c.is_for_discussion { "ja" } else { "nein" },
            if c.is_processed { "ja" } else { "nein" }
        ),
        None => println!("Kein Kommentar mit der ID {id}"),
    }
}

/// Executes a single command and returns whether the document was modified.
fn run(cli: Cli, cfg: &Config, db: &InMemoryDb) -> Result<bool> {
    let Cli {
        user_id,
        user_name,
        command,
        ..
    } = cli;
    let user = Author {
        name: user_name.unwrap_or_else(|| user_id.clone()),
        id: user_id.into(),
        avatar: None,
    };
    let formatter = &cfg.display.date_formatter;

    match command {
        Command::New { title, metadata: args } => {
            let unit = flows::create_learning_unit(db, metadata(title, args))?;
            println!("{}", unit.id);
        }
        Command::List => {
            for unit in flows::list_learning_units(db)? {
                println!(
                    "{}  {}  {}",
                    unit.id,
                    formatter.format(unit.updated_at),
                    unit.metadata.title
                );
            }
            return Ok(false);
        }
        Command::Show { unit } => {
            let unit = flows::load_learning_unit(db, &unit)?;
            let panel = comment_panel(cfg, &user, unit.id.to_string());
            let comments: Vec<_> = panel
                .comments(db, Timestamp::now())?
                .into_iter()
                .map(|view| view.comment)
                .collect();
            println!("{}", learning_unit_report(&unit, &comments, formatter)?);
            return Ok(false);
        }
        Command::Meta {
            unit,
            title,
            metadata: args,
        } => {
            let current = flows::load_learning_unit(db, &unit)?;
            let title = title.unwrap_or(current.metadata.title);
            flows::update_basic_metadata(db, &unit, metadata(title, args))?;
        }
        Command::Explain { unit, text } => {
            flows::update_explanation(db, &unit, text)?;
        }
        Command::Notes { unit, text } => {
            flows::update_notes(db, &unit, text)?;
        }
        Command::Presentation(PresentationCommand::Attach {
            unit,
            file_name,
            media_type,
            size,
        }) => {
            let file = usecases::NewPresentationFile {
                file_name,
                media_type,
                size_bytes: size,
            };
            flows::attach_presentation(db, &unit, file)?;
        }
        Command::Presentation(PresentationCommand::Detach { unit }) => {
            if flows::detach_presentation(db, &unit)?.is_none() {
                return Ok(false);
            }
        }
        Command::Comment(cmd) => return run_comment_command(cmd, cfg, &user, db),
        Command::Snippet(SnippetCommand::Add { unit, text }) => {
            let snippet = flows::add_snippet(db, &unit, &text)?;
            println!("{}", snippet.id);
        }
        Command::Snippet(SnippetCommand::Remove { unit, id }) => {
            flows::remove_snippet(db, &unit, &id)?;
        }
        Command::Snippet(SnippetCommand::Copy { unit, id }) => {
            let notifier = ConsoleNotifier::new(cfg.clipboard.clone());
            flows::copy_snippet(db, &notifier, &unit, &id)?;
            return Ok(false);
        }
    }
    Ok(true)
}

fn run_comment_command(
    cmd: CommentCommand,
    cfg: &Config,
    user: &Author,
    db: &InMemoryDb,
) -> Result<bool> {
    let formatter = &cfg.display.date_formatter;
    match cmd {
        CommentCommand::Add { context, text } => {
            let mut panel = comment_panel(cfg, user, context);
            panel.set_draft(text);
            match panel.submit(db)? {
                Some(comment) => println!("{}", comment.id),
                None => {
                    log::warn!("Empty comments are ignored");
                    return Ok(false);
                }
            }
        }
        CommentCommand::List { context, json } => {
            let panel = comment_panel(cfg, user, context);
            let now = Timestamp::now();
            if json {
                let comments = panel
                    .comments(db, now)?
                    .into_iter()
                    .map(|view| view.comment)
                    .collect();
                let mut stdout = io::stdout().lock();
                flows::write_annotated_comments(comments, &mut stdout)?;
                writeln!(stdout)?;
                return Ok(false);
            }
            for view in panel.comments(db, now)? {
                let flows::CommentView {
                    comment: annotated,
                    can_delete,
                    ..
                } = view;
                let usecases::AnnotatedComment {
                    comment, priority, ..
                } = annotated;
                println!(
                    "{}  {:<6}  {}  {}{}: {}",
                    comment.id,
                    priority,
                    formatter.format(comment.created_at),
                    comment.author.name,
                    if can_delete { " (eigener)" } else { "" },
                    comment.content
                );
            }
            let summary = panel.summary(db, now)?;
            println!(
                "{} Kommentare, {} überfällig, {} bearbeitet",
                summary.total, summary.overdue, summary.processed
            );
            return Ok(false);
        }
        CommentCommand::Process { context, id } => {
            let panel = comment_panel(cfg, user, context);
            print_comment_result(panel.toggle_processed(db, &id)?, &id);
        }
        CommentCommand::Discuss { context, id } => {
            let panel = comment_panel(cfg, user, context);
            print_comment_result(panel.toggle_for_discussion(db, &id)?, &id);
        }
        CommentCommand::Resolve { context, id, text } => {
            let mut panel = comment_panel(cfg, user, context);
            if !panel.start_editing_resolution(db, &id)? {
                print_comment_result(None, &id);
                return Ok(false);
            }
            panel.edit_resolution(text);
            print_comment_result(panel.save_resolution(db)?, &id);
        }
        CommentCommand::Delete { context, id } => {
            let mut panel = comment_panel(cfg, user, context);
            let deleted = panel.delete(db, &id)?;
            println!("{} gelöscht", deleted.id);
        }
    }
    Ok(true)
}
