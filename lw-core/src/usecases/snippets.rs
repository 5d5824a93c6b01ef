use super::{learning_unit::modify_learning_unit, prelude::*};
use crate::gateways::notify::{Notification, Notifier};

pub fn add_snippet<R>(repo: &R, unit_id: &str, text: &str, now: Timestamp) -> Result<Snippet>
where
    R: LearningUnitRepo,
{
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptySnippet);
    }
    let snippet = Snippet {
        id: Id::new(),
        created_at: now,
        text: text.to_owned(),
    };
    log::info!("Adding snippet {} to learning unit {unit_id}", snippet.id);
    let (_, ()) = modify_learning_unit(repo, unit_id, now, |unit| {
        unit.snippets.push(snippet.clone());
        Ok(())
    })?;
    Ok(snippet)
}

pub fn remove_snippet<R>(
    repo: &R,
    unit_id: &str,
    snippet_id: &str,
    now: Timestamp,
) -> Result<Snippet>
where
    R: LearningUnitRepo,
{
    log::info!("Removing snippet {snippet_id} from learning unit {unit_id}");
    let (_, removed) = modify_learning_unit(repo, unit_id, now, |unit| {
        let index = unit
            .snippets
            .iter()
            .position(|s| s.id == snippet_id)
            .ok_or(Error::SnippetNotFound)?;
        Ok(unit.snippets.remove(index))
    })?;
    Ok(removed)
}

/// Hand the text of a snippet to the clipboard and tell the user about it.
pub fn copy_snippet<R, N>(repo: &R, notifier: &N, unit_id: &str, snippet_id: &str) -> Result<()>
where
    R: LearningUnitRepo,
    N: Notifier,
{
    let unit = repo.load_learning_unit(unit_id)?;
    let snippet = unit.snippet(snippet_id).ok_or(Error::SnippetNotFound)?;
    if let Err(err) = notifier.copy_to_clipboard(&snippet.text) {
        log::warn!("Failed to copy snippet {snippet_id} to the clipboard: {err}");
        notifier.notify(Notification::warning(
            "Der Textbaustein konnte nicht kopiert werden.",
        ));
        return Err(Error::Clipboard(err));
    }
    notifier.notify(Notification::info(
        "Textbaustein in die Zwischenablage kopiert.",
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;
    use crate::gateways::notify::NotificationLevel;
    use lw_entities::builders::*;

    fn db_with_unit() -> MockDb {
        let db = MockDb::default();
        let unit = LearningUnit::build()
            .id("lu1")
            .title("Fractions")
            .created_at(t0())
            .snippet("s1", "Half of a pizza is 1/2.")
            .finish();
        db.create_learning_unit(unit).unwrap();
        db
    }

    #[test]
    fn add_and_remove_snippets() {
        let db = db_with_unit();
        let added = add_snippet(&db, "lu1", "  A third is 1/3. ", t0()).unwrap();
        assert_eq!(added.text, "A third is 1/3.");
        let unit = db.load_learning_unit("lu1").unwrap();
        assert_eq!(unit.snippets.len(), 2);
        assert_eq!(unit.snippets[1], added);

        let removed = remove_snippet(&db, "lu1", "s1", t0()).unwrap();
        assert_eq!(removed.text, "Half of a pizza is 1/2.");
        let unit = db.load_learning_unit("lu1").unwrap();
        assert_eq!(unit.snippets, vec![added]);
    }

    #[test]
    fn reject_empty_snippet() {
        let db = db_with_unit();
        assert!(matches!(
            add_snippet(&db, "lu1", " \t", t0()),
            Err(Error::EmptySnippet)
        ));
        assert_eq!(db.load_learning_unit("lu1").unwrap().snippets.len(), 1);
    }

    #[test]
    fn remove_unknown_snippet() {
        let db = db_with_unit();
        assert!(matches!(
            remove_snippet(&db, "lu1", "s2", t0()),
            Err(Error::SnippetNotFound)
        ));
        assert_eq!(db.load_learning_unit("lu1").unwrap().snippets.len(), 1);
    }

    #[test]
    fn copy_snippet_to_clipboard() {
        let db = db_with_unit();
        let notifier = MockNotifier::default();
        copy_snippet(&db, &notifier, "lu1", "s1").unwrap();
        assert_eq!(
            notifier.clipboard.borrow().as_deref(),
            Some("Half of a pizza is 1/2.")
        );
        let notifications = notifier.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Info);
    }

    #[test]
    fn copy_without_clipboard() {
        let db = db_with_unit();
        let notifier = MockNotifier {
            clipboard_unavailable: true,
            ..Default::default()
        };
        assert!(matches!(
            copy_snippet(&db, &notifier, "lu1", "s1"),
            Err(Error::Clipboard(_))
        ));
        let notifications = notifier.notifications.borrow();
        assert_eq!(notifications[0].level, NotificationLevel::Warning);
    }
}
