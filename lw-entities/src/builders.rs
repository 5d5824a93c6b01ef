pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, learning_unit_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{author::*, comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn context(mut self, context: &str) -> Self {
            self.comment.context = context.into();
            self
        }
        pub fn author(mut self, id: &str, name: &str) -> Self {
            self.comment.author = Author {
                id: id.into(),
                name: name.into(),
                avatar: None,
            };
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn for_discussion(mut self, v: bool) -> Self {
            self.comment.is_for_discussion = v;
            self
        }
        pub fn processed(mut self, v: bool) -> Self {
            self.comment.is_processed = v;
            self
        }
        pub fn resolution(mut self, resolution: &str) -> Self {
            self.comment.resolution = resolution.into();
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    context: "".into(),
                    author: Author {
                        id: Id::new(),
                        name: "".into(),
                        avatar: None,
                    },
                    created_at: Timestamp::now(),
                    content: "".into(),
                    is_for_discussion: true,
                    is_processed: false,
                    resolution: "".into(),
                },
            }
        }
    }
}

pub mod learning_unit_builder {

    use super::*;
    use crate::{id::*, learning_unit::*, presentation::*, snippet::*, time::*};

    #[derive(Debug)]
    pub struct LearningUnitBuild {
        unit: LearningUnit,
    }

    impl LearningUnitBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.unit.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.unit.metadata.title = title.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.unit.created_at = created_at;
            self.unit.updated_at = created_at;
            self
        }
        pub fn explanation(mut self, explanation: &str) -> Self {
            self.unit.explanation = explanation.into();
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.unit.notes = notes.into();
            self
        }
        pub fn presentation(mut self, file_name: &str, media_type: &str) -> Self {
            self.unit.presentation = Some(PresentationFile {
                file_name: file_name.into(),
                media_type: media_type.into(),
                size_bytes: 0,
                uploaded_at: self.unit.created_at,
            });
            self
        }
        pub fn snippet(mut self, id: &str, text: &str) -> Self {
            self.unit.snippets.push(Snippet {
                id: id.into(),
                created_at: self.unit.created_at,
                text: text.into(),
            });
            self
        }
        pub fn finish(self) -> LearningUnit {
            self.unit
        }
    }

    impl Builder for LearningUnit {
        type Build = LearningUnitBuild;
        fn build() -> Self::Build {
            let now = Timestamp::now();
            LearningUnitBuild {
                unit: LearningUnit {
                    id: Id::new(),
                    created_at: now,
                    updated_at: now,
                    metadata: BasicMetadata::default(),
                    explanation: "".into(),
                    notes: "".into(),
                    presentation: None,
                    snippets: vec![],
                },
            }
        }
    }

    #[test]
    fn find_snippet_by_id() {
        let unit = LearningUnit::build()
            .snippet("s1", "first")
            .snippet("s2", "second")
            .finish();
        assert_eq!(unit.snippet("s2").map(|s| s.text.as_str()), Some("second"));
        assert!(unit.snippet("s3").is_none());
    }

    #[test]
    fn touch_never_moves_backwards() {
        let t0 = Timestamp::try_from_secs(1_000).unwrap();
        let t1 = Timestamp::try_from_secs(2_000).unwrap();
        let mut unit = LearningUnit::build().created_at(t1).finish();
        unit.touch(t0);
        assert_eq!(unit.updated_at, t1);
        unit.touch(t1 + TimeSpan::seconds(1));
        assert!(unit.updated_at > t1);
    }
}
