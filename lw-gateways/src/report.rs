use askama::Template;
use lw_core::{entities::*, usecases::AnnotatedComment};

use crate::date::DateFormatter;

struct CommentLine {
    marker: &'static str,
    priority: String,
    created_at: String,
    author: String,
    id: String,
    content: String,
    resolution: String,
    flags: String,
}

struct SnippetLine {
    id: String,
    text: String,
}

#[derive(Template)]
#[template(path = "learning_unit_DE.txt")]
struct LearningUnitTemplate<'a> {
    id: &'a str,
    title: &'a str,
    subject: &'a str,
    grade_level: &'a str,
    duration: &'a str,
    tags: &'a str,
    updated_at: &'a str,
    explanation: &'a str,
    notes: &'a str,
    presentation: &'a str,
    snippets: &'a [SnippetLine],
    comments: &'a [CommentLine],
}

fn comment_line(annotated: &AnnotatedComment, formatter: &DateFormatter) -> CommentLine {
    let AnnotatedComment {
        comment,
        priority,
        is_overdue,
        ..
    } = annotated;
    let marker = if *is_overdue { "!" } else { " " };
    let mut flags = vec![];
    if comment.is_for_discussion {
        flags.push("zur Diskussion");
    }
    if comment.is_processed {
        flags.push("bearbeitet");
    }
    CommentLine {
        marker,
        priority: priority.to_string(),
        created_at: formatter.format(comment.created_at),
        author: comment.author.name.clone(),
        id: comment.id.to_string(),
        content: comment.content.clone(),
        resolution: comment.resolution.clone(),
        flags: flags.join(", "),
    }
}

fn presentation_line(file: Option<&PresentationFile>, formatter: &DateFormatter) -> String {
    file.map(|f| {
        format!(
            "{} ({}, {} Bytes, hochgeladen am {})",
            f.file_name,
            f.media_type,
            f.size_bytes,
            formatter.format(f.uploaded_at)
        )
    })
    .unwrap_or_else(|| "-".to_string())
}

/// Plain text overview of a learning unit and the comments on it.
pub fn learning_unit_report(
    unit: &LearningUnit,
    comments: &[AnnotatedComment],
    formatter: &DateFormatter,
) -> askama::Result<String> {
    let BasicMetadata {
        title,
        subject,
        grade_level,
        duration_minutes,
        tags,
    } = &unit.metadata;
    let duration = duration_minutes
        .map(|m| format!("{m} Minuten"))
        .unwrap_or_default();
    let snippets: Vec<_> = unit
        .snippets
        .iter()
        .map(|s| SnippetLine {
            id: s.id.to_string(),
            text: s.text.clone(),
        })
        .collect();
    let comments: Vec<_> = comments
        .iter()
        .map(|c| comment_line(c, formatter))
        .collect();
    LearningUnitTemplate {
        id: unit.id.as_str(),
        title,
        subject: subject.as_deref().unwrap_or(""),
        grade_level: grade_level.as_deref().unwrap_or(""),
        duration: &duration,
        tags: &tags.join(", "),
        updated_at: &formatter.format(unit.updated_at),
        explanation: &unit.explanation,
        notes: &unit.notes,
        presentation: &presentation_line(unit.presentation.as_ref(), formatter),
        snippets: &snippets,
        comments: &comments,
    }
    .render()
}
