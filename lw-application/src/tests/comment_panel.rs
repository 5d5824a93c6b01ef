use super::prelude::*;
use flows::CommentPanel;

fn comment(id: &str, author: &Author, created_at: Timestamp) -> Comment {
    Comment::build()
        .id(id)
        .context("unit-1")
        .author(author.id.as_str(), &author.name)
        .created_at(created_at)
        .content("Bitte prüfen")
        .finish()
}

#[test]
fn ignore_blank_drafts() {
    let fixture = BackendFixture::new();
    let mut panel = CommentPanel::new("unit-1", alice());
    panel.set_draft("  \n\t ");
    assert!(!panel.can_submit());
    assert_eq!(panel.submit(&fixture.db).unwrap(), None);
    assert_eq!(fixture.db.count_comments(), 0);
    assert_eq!(panel.draft(), "  \n\t ");
}

#[test]
fn submit_draft() {
    let fixture = BackendFixture::new();
    let mut panel = CommentPanel::new("unit-1", alice());
    panel.set_draft("  Folie 3 ist zu voll \n");
    assert!(panel.can_submit());
    let comment = panel.submit(&fixture.db).unwrap().unwrap();
    assert_eq!(comment.content, "Folie 3 ist zu voll");
    assert_eq!(comment.context, "unit-1");
    assert_eq!(comment.author, alice());
    assert!(comment.is_for_discussion);
    assert!(!comment.is_processed);
    assert!(comment.resolution.is_empty());
    assert!(panel.draft().is_empty());
    assert_eq!(fixture.db.count_comments(), 1);
}

#[test]
fn placeholder() {
    let panel = CommentPanel::new("Notizen", alice());
    assert_eq!(panel.placeholder(), "Kommentar zu Notizen hinzufügen");
    let panel = panel.with_placeholder("Was fällt dir auf?");
    assert_eq!(panel.placeholder(), "Was fällt dir auf?");
}

#[test]
fn list_comments_with_priority_and_permissions() {
    let fixture = BackendFixture::new();
    fixture.insert_comment(comment("old", &alice(), days_ago(10)));
    let mut aging = comment("aging", &bob(), days_ago(5));
    aging.is_for_discussion = false;
    fixture.insert_comment(aging);
    fixture.insert_comment(comment("done", &bob(), days_ago(10)));
    usecases::toggle_processed(&fixture.db, "done").unwrap();
    fixture.insert_comment(Comment::build().context("other").finish());

    let panel = CommentPanel::new("unit-1", alice());
    let views = panel.comments(&fixture.db, Timestamp::now()).unwrap();
    assert_eq!(views.len(), 3);

    assert_eq!(views[0].comment.comment.id, "old");
    assert_eq!(views[0].comment.priority, Priority::High);
    assert!(views[0].comment.is_overdue);
    assert!(views[0].can_delete);

    assert_eq!(views[1].comment.comment.id, "aging");
    assert_eq!(views[1].comment.priority, Priority::Medium);
    assert!(!views[1].comment.is_overdue);
    assert!(!views[1].can_delete);

    // Processed comments are never prioritized, even if overdue
    assert_eq!(views[2].comment.comment.id, "done");
    assert_eq!(views[2].comment.priority, Priority::Low);
    assert!(views[2].comment.is_overdue);

    let summary = panel.summary(&fixture.db, Timestamp::now()).unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.overdue, 2);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.count(Priority::High), 1);
    assert_eq!(summary.count(Priority::Medium), 1);
    assert_eq!(summary.count(Priority::Low), 1);
}

#[test]
fn edit_and_save_resolution() {
    let fixture = BackendFixture::new();
    fixture.insert_comment(comment("c1", &bob(), days_ago(1)));
    fixture.insert_comment(comment("c2", &bob(), days_ago(1)));
    let mut panel = CommentPanel::new("unit-1", alice());

    assert!(!panel.start_editing_resolution(&fixture.db, "unknown").unwrap());
    assert!(panel.editing().is_none());

    assert!(panel.start_editing_resolution(&fixture.db, "c1").unwrap());
    panel.edit_resolution("Folie aufgeteilt");
    let views = panel.comments(&fixture.db, Timestamp::now()).unwrap();
    assert!(views[0].is_editing);
    assert!(!views[1].is_editing);

    // Updating another field keeps the edit mode
    panel
        .update(&fixture.db, "c1", CommentUpdate::processed(true))
        .unwrap();
    assert!(panel.editing().is_some());

    let saved = panel.save_resolution(&fixture.db).unwrap().unwrap();
    assert_eq!(saved.resolution, "Folie aufgeteilt");
    assert!(saved.is_processed);
    assert!(saved.is_for_discussion);
    assert_eq!(saved.content, "Bitte prüfen");
    assert!(panel.editing().is_none());
    assert_eq!(panel.save_resolution(&fixture.db).unwrap(), None);
}

#[test]
fn cancel_editing_resolution() {
    let fixture = BackendFixture::new();
    fixture.insert_comment(comment("c1", &bob(), days_ago(1)));
    let mut panel = CommentPanel::new("unit-1", alice());
    assert!(panel.start_editing_resolution(&fixture.db, "c1").unwrap());
    panel.edit_resolution("verworfen");
    panel.cancel_editing();
    assert!(panel.editing().is_none());
    let c1 = fixture.db.load_comment("c1").unwrap();
    assert!(c1.resolution.is_empty());
}

#[test]
fn update_only_the_given_fields() {
    let fixture = BackendFixture::new();
    let original = comment("c1", &bob(), days_ago(2));
    fixture.insert_comment(original.clone());
    let mut panel = CommentPanel::new("unit-1", alice());
    let updated = panel
        .update(&fixture.db, "c1", CommentUpdate::processed(true))
        .unwrap()
        .unwrap();
    assert_eq!(
        updated,
        Comment {
            is_processed: true,
            ..original
        }
    );
    assert_eq!(
        panel
            .update(&fixture.db, "unknown", CommentUpdate::processed(true))
            .unwrap(),
        None
    );
}

#[test]
fn toggle_flags() {
    let fixture = BackendFixture::new();
    fixture.insert_comment(comment("c1", &bob(), days_ago(2)));
    let panel = CommentPanel::new("unit-1", alice());
    let c1 = panel
        .toggle_for_discussion(&fixture.db, "c1")
        .unwrap()
        .unwrap();
    assert!(!c1.is_for_discussion);
    let c1 = panel.toggle_processed(&fixture.db, "c1").unwrap().unwrap();
    assert!(c1.is_processed);
    assert!(!c1.is_for_discussion);
    assert_eq!(panel.toggle_processed(&fixture.db, "c2").unwrap(), None);
}

#[test]
fn only_the_author_may_delete_a_comment() {
    let fixture = BackendFixture::new();
    fixture.insert_comment(comment("c1", &alice(), days_ago(2)));

    let mut panel_of_bob = CommentPanel::new("unit-1", bob());
    let err = panel_of_bob.delete(&fixture.db, "c1").unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(fixture.db.count_comments(), 1);

    let mut panel_of_alice = CommentPanel::new("unit-1", alice());
    assert!(panel_of_alice
        .start_editing_resolution(&fixture.db, "c1")
        .unwrap());
    let deleted = panel_of_alice.delete(&fixture.db, "c1").unwrap();
    assert_eq!(deleted.id, "c1");
    assert!(panel_of_alice.editing().is_none());
    assert_eq!(fixture.db.count_comments(), 0);

    assert!(panel_of_alice
        .delete(&fixture.db, "c1")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn comments_of_other_contexts_are_out_of_reach() {
    let fixture = BackendFixture::new();
    let foreign = Comment::build()
        .id("x1")
        .context("unit-2")
        .author("alice", "Alice")
        .created_at(days_ago(1))
        .finish();
    fixture.insert_comment(foreign.clone());

    let mut panel = CommentPanel::new("unit-1", alice());
    assert!(panel
        .comments(&fixture.db, Timestamp::now())
        .unwrap()
        .is_empty());
    assert_eq!(panel.toggle_processed(&fixture.db, "x1").unwrap(), None);
    assert_eq!(panel.toggle_for_discussion(&fixture.db, "x1").unwrap(), None);
    assert_eq!(
        panel
            .update(&fixture.db, "x1", CommentUpdate::resolution("fremd"))
            .unwrap(),
        None
    );
    assert!(!panel.start_editing_resolution(&fixture.db, "x1").unwrap());
    assert!(panel.editing().is_none());
    assert!(panel.delete(&fixture.db, "x1").unwrap_err().is_not_found());

    assert_eq!(fixture.db.count_comments(), 1);
    assert_eq!(fixture.db.load_comment("x1").unwrap(), foreign);
}

#[test]
fn keep_edit_mode_if_the_resolution_could_not_be_saved() {
    let fixture = BackendFixture::new();
    fixture.insert_comment(comment("c1", &bob(), days_ago(1)));
    let mut panel = CommentPanel::new("unit-1", alice());
    assert!(panel.start_editing_resolution(&fixture.db, "c1").unwrap());
    panel.edit_resolution("zu spät");

    // Removed by someone else in the meantime
    fixture.db.delete_comment("c1").unwrap();

    assert_eq!(panel.save_resolution(&fixture.db).unwrap(), None);
    let edit = panel.editing().unwrap();
    assert_eq!(edit.comment_id, "c1");
    assert_eq!(edit.text, "zu spät");
}

#[test]
fn write_annotated_comments_as_json() {
    let fixture = BackendFixture::new();
    fixture.insert_comment(comment("old", &bob(), days_ago(10)));
    let panel = CommentPanel::new("unit-1", alice());
    let annotated = panel
        .comments(&fixture.db, Timestamp::now())
        .unwrap()
        .into_iter()
        .map(|view| view.comment)
        .collect();

    let mut buf = Vec::new();
    flows::write_annotated_comments(annotated, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(json[0]["id"], "old");
    assert_eq!(json[0]["author"]["name"], "Bob");
    assert_eq!(json[0]["priority"], "high");
    assert_eq!(json[0]["isOverdue"], true);
    assert!(json[0].get("daysSinceCreated").is_none());
}
