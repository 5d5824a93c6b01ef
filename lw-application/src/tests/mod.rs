mod comment_panel;

pub mod prelude {

    use std::cell::RefCell;

    pub use lw_core::{
        entities::*,
        gateways::notify::{Notification, NotificationLevel, Notifier},
        repositories::{CommentRepo, LearningUnitRepo},
        usecases::{self, Error as ParameterError},
    };
    pub use lw_entities::builders::*;

    pub use lw_db_memory::InMemoryDb;

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub fn author(id: &str, name: &str) -> Author {
        Author {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }

    pub fn alice() -> Author {
        author("alice", "Alice")
    }

    pub fn bob() -> Author {
        author("bob", "Bob")
    }

    pub fn days_ago(days: i64) -> Timestamp {
        Timestamp::now() - TimeSpan::days(days)
    }

    pub fn parameter_error(err: AppError) -> ParameterError {
        match err {
            AppError::Business(BError::Parameter(err)) => err,
            err => panic!("Unexpected error: {err}"),
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notifications: RefCell<Vec<Notification>>,
        pub clipboard: RefCell<Option<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }
        fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
            *self.clipboard.borrow_mut() = Some(text.to_owned());
            Ok(())
        }
    }

    pub struct BackendFixture {
        pub db: InMemoryDb,
        pub notify: RecordingNotifier,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self {
                db: InMemoryDb::default(),
                notify: RecordingNotifier::default(),
            }
        }

        pub fn create_learning_unit(&self, title: &str) -> LearningUnit {
            let metadata = BasicMetadata {
                title: title.into(),
                ..Default::default()
            };
            flows::create_learning_unit(&self.db, metadata).unwrap()
        }

        pub fn insert_comment(&self, comment: Comment) {
            self.db.create_comment(comment).unwrap();
        }
    }
}
