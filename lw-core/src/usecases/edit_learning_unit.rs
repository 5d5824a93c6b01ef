use super::{learning_unit::modify_learning_unit, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

#[derive(Debug, Clone)]
pub struct NewPresentationFile {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

pub fn update_basic_metadata<R>(
    repo: &R,
    id: &str,
    metadata: BasicMetadata,
    now: Timestamp,
) -> Result<LearningUnit>
where
    R: LearningUnitRepo,
{
    let metadata = metadata.auto_correct();
    metadata.validate()?;
    log::info!("Updating metadata of learning unit {id}");
    let (unit, ()) = modify_learning_unit(repo, id, now, |unit| {
        unit.metadata = metadata;
        Ok(())
    })?;
    Ok(unit)
}

pub fn update_explanation<R>(
    repo: &R,
    id: &str,
    explanation: String,
    now: Timestamp,
) -> Result<LearningUnit>
where
    R: LearningUnitRepo,
{
    log::info!("Updating explanation of learning unit {id}");
    let (unit, ()) = modify_learning_unit(repo, id, now, |unit| {
        unit.explanation = explanation;
        Ok(())
    })?;
    Ok(unit)
}

pub fn update_notes<R>(repo: &R, id: &str, notes: String, now: Timestamp) -> Result<LearningUnit>
where
    R: LearningUnitRepo,
{
    log::info!("Updating notes of learning unit {id}");
    let (unit, ()) = modify_learning_unit(repo, id, now, |unit| {
        unit.notes = notes;
        Ok(())
    })?;
    Ok(unit)
}

/// Replace the metadata of the uploaded presentation file.
pub fn attach_presentation<R>(
    repo: &R,
    id: &str,
    file: NewPresentationFile,
    now: Timestamp,
) -> Result<LearningUnit>
where
    R: LearningUnitRepo,
{
    let NewPresentationFile {
        file_name,
        media_type,
        size_bytes,
    } = file;
    let file = PresentationFile {
        file_name: file_name.trim().to_owned(),
        media_type: media_type.trim().to_owned(),
        size_bytes,
        uploaded_at: now,
    };
    file.validate()?;
    log::info!(
        "Attaching presentation '{}' ({}, {} bytes) to learning unit {id}",
        file.file_name,
        file.media_type,
        file.size_bytes
    );
    let (unit, ()) = modify_learning_unit(repo, id, now, |unit| {
        unit.presentation = Some(file);
        Ok(())
    })?;
    Ok(unit)
}

/// Returns the metadata of the removed file, if any.
pub fn detach_presentation<R>(
    repo: &R,
    id: &str,
    now: Timestamp,
) -> Result<(LearningUnit, Option<PresentationFile>)>
where
    R: LearningUnitRepo,
{
    log::info!("Detaching presentation from learning unit {id}");
    modify_learning_unit(repo, id, now, |unit| Ok(unit.presentation.take()))
}
