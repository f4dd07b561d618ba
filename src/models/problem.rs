//! Problem model
//!
//! A problem row plus the rules attached to it: how its tests are grouped and
//! scored, which field values are acceptable, and who may see or edit it.
//! Anything that needs the database or the renderer goes through the
//! collaborator traits in [`crate::db::store`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    constants::{
        DEFAULT_MEMORY_LIMIT_KB, DEFAULT_TIME_LIMIT_MS, MAX_TESTS, MIN_TESTS, TOTAL_POINTS, fields,
    },
    db::store::{AttachmentStore, ProblemStore, TagStore, UserStore},
    error::AppResult,
    render::MarkupRenderer,
    utils::{time, validation},
};

use super::{
    Attachment, Grade, Tag, User, Visibility,
    permission::{Actor, Permission},
    test_group::{TestGroup, TestGroupError, parse_test_groups},
};

/// Validation messages keyed by form field name; empty means valid
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: Uuid,
    pub name: String,
    pub statement: String,
    pub num_tests: i32,
    pub time_limit_ms: i32,
    pub memory_limit_kb: i32,
    pub grader: Option<String>,
    pub has_witness: bool,
    pub public_sources: i16,
    pub public_tests: i16,
    pub year: i32,
    pub grade: String,
    pub test_groups: Option<String>,
    pub visibility: Visibility,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rendered statement, computed once per instance
    #[sqlx(skip)]
    #[serde(skip)]
    html: OnceLock<String>,

    /// Author row, fetched once per instance
    #[sqlx(skip)]
    #[serde(skip)]
    author: OnceLock<User>,
}

impl Problem {
    /// A new, unsaved problem owned by `user_id`
    pub fn new(name: impl Into<String>, user_id: Uuid) -> Self {
        let now = time::now_utc();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            statement: String::new(),
            num_tests: MIN_TESTS,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            memory_limit_kb: DEFAULT_MEMORY_LIMIT_KB,
            grader: None,
            has_witness: false,
            public_sources: 0,
            public_tests: 0,
            year: time::current_year(),
            grade: String::new(),
            test_groups: None,
            visibility: Visibility::Private,
            user_id,
            created_at: now,
            updated_at: now,
            html: OnceLock::new(),
            author: OnceLock::new(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn has_public_sources(&self) -> bool {
        self.public_sources == 1
    }

    pub fn has_public_tests(&self) -> bool {
        self.public_tests == 1
    }

    /// Typed view of the stored grade, `None` if it is not a valid grade
    pub fn grade(&self) -> Option<Grade> {
        Grade::parse(&self.grade)
    }

    /// Number of tests, treating a negative count as none
    pub fn test_count(&self) -> u32 {
        u32::try_from(self.num_tests).unwrap_or(0)
    }

    /// The test groups, or why `test_groups` does not partition the tests
    pub fn test_groups(&self) -> Result<Vec<TestGroup>, TestGroupError> {
        parse_test_groups(self.test_groups.as_deref(), self.test_count())
    }

    /// Whether `num_tests` is within the allowed range
    pub fn has_valid_test_count(&self) -> bool {
        (MIN_TESTS..=MAX_TESTS).contains(&self.num_tests)
    }

    /// Points per test number. Every test is currently worth the same.
    /// Empty when the test count is out of range.
    pub fn test_points(&self) -> BTreeMap<u32, f64> {
        if !self.has_valid_test_count() {
            return BTreeMap::new();
        }
        let count = self.test_count();
        (1..=count)
            .map(|test| (test, TOTAL_POINTS / f64::from(count)))
            .collect()
    }

    /// Validate every field against the current calendar year
    pub async fn validate<S: ProblemStore + ?Sized>(&self, store: &S) -> AppResult<FieldErrors> {
        self.validate_at(store, time::current_year()).await
    }

    /// Validate every field. Does not modify or persist anything.
    ///
    /// The store is queried at most once, for name uniqueness, and only when
    /// the name is well formed. Store failures are returned as errors rather
    /// than folded into the field map.
    pub async fn validate_at<S: ProblemStore + ?Sized>(
        &self,
        store: &S,
        current_year: i32,
    ) -> AppResult<FieldErrors> {
        let mut errors = FieldErrors::new();

        match validation::validate_problem_name(&self.name) {
            Err(msg) => record(&mut errors, fields::NAME, Err(msg)),
            Ok(()) => {
                if store
                    .find_by_name_excluding(&self.name, self.id)
                    .await?
                    .is_some()
                {
                    record(
                        &mut errors,
                        fields::NAME,
                        Err("There already exists a problem with this name."),
                    );
                }
            }
        }

        record(&mut errors, fields::STATEMENT, validation::validate_statement(&self.statement));
        record(&mut errors, fields::NUM_TESTS, validation::validate_num_tests(self.num_tests));
        record(&mut errors, fields::TIME_LIMIT, validation::validate_time_limit(self.time_limit_ms));
        record(
            &mut errors,
            fields::MEMORY_LIMIT,
            validation::validate_memory_limit(self.memory_limit_kb),
        );
        record(
            &mut errors,
            fields::GRADER,
            validation::validate_judging(self.grader.as_deref(), self.has_witness),
        );
        record(
            &mut errors,
            fields::PUBLIC_SOURCES,
            validation::validate_public_sources(self.public_sources),
        );
        record(
            &mut errors,
            fields::PUBLIC_TESTS,
            validation::validate_public_tests(self.public_tests),
        );
        record(&mut errors, fields::YEAR, validation::validate_year(self.year, current_year));
        record(&mut errors, fields::GRADE, validation::validate_grade(&self.grade));

        // Groups are only checked against a usable test count
        if self.has_valid_test_count() {
            record(
                &mut errors,
                fields::TEST_GROUPS,
                self.test_groups().map(|_| ()).map_err(|e| e.to_string()),
            );
        }

        tracing::debug!(problem = %self.name, errors = errors.len(), "Validated problem");

        Ok(errors)
    }

    /// Whether `user` wrote this problem
    pub fn is_authored_by<A: Actor + ?Sized>(&self, user: &A) -> bool {
        user.id() == self.user_id
    }

    /// Public problems are visible to everyone, including anonymous users.
    /// Private ones only to problem editors and the author.
    pub fn viewable_by<A: Actor + ?Sized>(&self, user: Option<&A>) -> bool {
        self.is_public()
            || user.is_some_and(|u| u.can(Permission::EditProblem) || self.is_authored_by(u))
    }

    /// Anonymous users edit nothing; editors edit everything; authors edit their own.
    pub fn editable_by<A: Actor + ?Sized>(&self, user: Option<&A>) -> bool {
        user.is_some_and(|u| u.can(Permission::EditProblem) || self.is_authored_by(u))
    }

    /// Tests are currently open to everyone.
    pub fn tests_viewable_by<A: Actor + ?Sized>(&self, _user: Option<&A>) -> bool {
        true
    }

    /// Statement rendered to HTML
    pub fn html(&self, renderer: &dyn MarkupRenderer) -> &str {
        self.html.get_or_init(|| renderer.render(&self.statement))
    }

    /// The author's user row. A missing user is not cached.
    pub async fn author<S: UserStore + ?Sized>(&self, users: &S) -> AppResult<Option<&User>> {
        if let Some(user) = self.author.get() {
            return Ok(Some(user));
        }

        let Some(user) = users.find_user(self.user_id).await? else {
            tracing::warn!(problem = %self.name, user_id = %self.user_id, "Problem author not found");
            return Ok(None);
        };

        // Another call may have filled the cell meanwhile; both hold the same row
        let _ = self.author.set(user);
        Ok(self.author.get())
    }

    /// Tags ordered by rank
    pub async fn tags<S: TagStore + ?Sized>(&self, store: &S) -> AppResult<Vec<Tag>> {
        store.tags_for_problem(self.id).await
    }

    /// Directory holding this problem's uploaded files
    pub fn attachment_dir(&self, root: &Path) -> PathBuf {
        root.join("uploads").join("attachments").join(&self.name)
    }

    /// Input file of test `num`
    pub async fn test_input<S: AttachmentStore + ?Sized>(
        &self,
        store: &S,
        num: u32,
    ) -> AppResult<Option<Attachment>> {
        store
            .find_by_problem_and_name(self.id, &Attachment::test_input_name(num))
            .await
    }

    /// Witness (expected output) file of test `num`
    pub async fn test_witness<S: AttachmentStore + ?Sized>(
        &self,
        store: &S,
        num: u32,
    ) -> AppResult<Option<Attachment>> {
        store
            .find_by_problem_and_name(self.id, &Attachment::test_witness_name(num))
            .await
    }

    /// The grader file, if the problem uses a grader
    pub async fn grader_attachment<S: AttachmentStore + ?Sized>(
        &self,
        store: &S,
    ) -> AppResult<Option<Attachment>> {
        match self.grader.as_deref().filter(|g| !g.is_empty()) {
            Some(grader) => {
                store
                    .find_by_problem_and_name(self.id, &Attachment::grader_name(grader))
                    .await
            }
            None => Ok(None),
        }
    }
}

fn record<E: Into<String>>(errors: &mut FieldErrors, field: &'static str, result: Result<(), E>) {
    if let Err(msg) = result {
        errors.entry(field).or_insert_with(|| msg.into());
    }
}
