use super::*;
use lw_boundary as json;
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

fn document_into_db(document: json::Document) -> Result<InMemoryDb> {
    let json::Document {
        learning_units,
        comments,
    } = document;
    let learning_units = learning_units
        .into_iter()
        .map(LearningUnit::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let comments = comments
        .into_iter()
        .map(Comment::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(InMemoryDb::from_records(learning_units, comments))
}

fn db_into_document(db: InMemoryDb) -> json::Document {
    let (learning_units, comments) = db.into_records();
    json::Document {
        learning_units: learning_units.into_iter().map(Into::into).collect(),
        comments: comments.into_iter().map(Into::into).collect(),
    }
}

/// Load all records from a JSON document file.
///
/// A missing file is treated like an empty document.
pub fn load_document(path: &Path) -> Result<InMemoryDb> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("Document file {} does not exist yet", path.display());
            return Ok(InMemoryDb::default());
        }
        Err(err) => return Err(err.into()),
    };
    let document: json::Document = serde_json::from_slice(&bytes)?;
    document_into_db(document)
}

/// Write all records into a JSON document file, replacing its contents.
pub fn save_document(db: InMemoryDb, path: &Path) -> Result<()> {
    let document = db_into_document(db);
    debug!(
        "Saving {} learning units and {} comments into {}",
        document.learning_units.len(),
        document.comments.len(),
        path.display()
    );
    let mut writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write comments with their derived state as a JSON array.
pub fn write_annotated_comments<W: Write>(
    comments: Vec<usecases::AnnotatedComment>,
    writer: W,
) -> Result<()> {
    let comments: Vec<_> = comments
        .into_iter()
        .map(|annotated| {
            let usecases::AnnotatedComment {
                comment,
                priority,
                is_overdue,
                ..
            } = annotated;
            json::AnnotatedComment {
                comment: comment.into(),
                priority: priority.into(),
                is_overdue,
            }
        })
        .collect();
    serde_json::to_writer_pretty(writer, &comments)?;
    Ok(())
}
