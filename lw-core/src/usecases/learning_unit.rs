use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

pub fn create_learning_unit<R>(
    repo: &R,
    metadata: BasicMetadata,
    now: Timestamp,
) -> Result<LearningUnit>
where
    R: LearningUnitRepo,
{
    let metadata = metadata.auto_correct();
    metadata.validate()?;
    let unit = LearningUnit {
        id: Id::new(),
        created_at: now,
        updated_at: now,
        metadata,
        explanation: String::new(),
        notes: String::new(),
        presentation: None,
        snippets: vec![],
    };
    log::info!(
        "Creating learning unit {} '{}'",
        unit.id,
        unit.metadata.title
    );
    repo.create_learning_unit(unit.clone())?;
    Ok(unit)
}

pub fn load_learning_unit<R>(repo: &R, id: &str) -> Result<LearningUnit>
where
    R: LearningUnitRepo,
{
    Ok(repo.load_learning_unit(id)?)
}

/// All learning units, most recently changed first.
pub fn list_learning_units<R>(repo: &R) -> Result<Vec<LearningUnit>>
where
    R: LearningUnitRepo,
{
    let mut units = repo.all_learning_units()?;
    units.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(units)
}

/// Load, modify and store a learning unit in one go.
pub(crate) fn modify_learning_unit<R, F, T>(
    repo: &R,
    id: &str,
    now: Timestamp,
    modify: F,
) -> Result<(LearningUnit, T)>
where
    R: LearningUnitRepo,
    F: FnOnce(&mut LearningUnit) -> Result<T>,
{
    let mut unit = repo.load_learning_unit(id)?;
    let output = modify(&mut unit)?;
    unit.touch(now);
    repo.update_learning_unit(&unit)?;
    Ok((unit, output))
}
