use super::*;
use lw_core::gateways::notify::Notifier;

pub fn create_learning_unit(db: &InMemoryDb, metadata: BasicMetadata) -> Result<LearningUnit> {
    Ok(usecases::create_learning_unit(
        db,
        metadata,
        Timestamp::now(),
    )?)
}

pub fn load_learning_unit(db: &InMemoryDb, id: &str) -> Result<LearningUnit> {
    Ok(usecases::load_learning_unit(db, id)?)
}

pub fn list_learning_units(db: &InMemoryDb) -> Result<Vec<LearningUnit>> {
    Ok(usecases::list_learning_units(db)?)
}

pub fn update_basic_metadata(
    db: &InMemoryDb,
    id: &str,
    metadata: BasicMetadata,
) -> Result<LearningUnit> {
    Ok(usecases::update_basic_metadata(
        db,
        id,
        metadata,
        Timestamp::now(),
    )?)
}

pub fn update_explanation(db: &InMemoryDb, id: &str, explanation: String) -> Result<LearningUnit> {
    Ok(usecases::update_explanation(
        db,
        id,
        explanation,
        Timestamp::now(),
    )?)
}

pub fn update_notes(db: &InMemoryDb, id: &str, notes: String) -> Result<LearningUnit> {
    Ok(usecases::update_notes(db, id, notes, Timestamp::now())?)
}

pub fn attach_presentation(
    db: &InMemoryDb,
    id: &str,
    file: usecases::NewPresentationFile,
) -> Result<LearningUnit> {
    Ok(usecases::attach_presentation(
        db,
        id,
        file,
        Timestamp::now(),
    )?)
}

pub fn detach_presentation(db: &InMemoryDb, id: &str) -> Result<Option<PresentationFile>> {
    let (_, detached) = usecases::detach_presentation(db, id, Timestamp::now())?;
    if detached.is_none() {
        debug!("Learning unit {id} has no presentation");
    }
    Ok(detached)
}

pub fn add_snippet(db: &InMemoryDb, unit_id: &str, text: &str) -> Result<Snippet> {
    Ok(usecases::add_snippet(db, unit_id, text, Timestamp::now())?)
}

pub fn remove_snippet(db: &InMemoryDb, unit_id: &str, snippet_id: &str) -> Result<Snippet> {
    Ok(usecases::remove_snippet(
        db,
        unit_id,
        snippet_id,
        Timestamp::now(),
    )?)
}

pub fn copy_snippet<N>(db: &InMemoryDb, notifier: &N, unit_id: &str, snippet_id: &str) -> Result<()>
where
    N: Notifier,
{
    usecases::copy_snippet(db, notifier, unit_id, snippet_id).map_err(|err| {
        warn!("Copying snippet {snippet_id} of learning unit {unit_id} failed: {err}");
        err.into()
    })
}
