//! The dashboard: overview, listing, and the add/edit form flow.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::clock::{Clock, SystemClock};
use super::errors::{DashboardError, DashboardResult};
use super::notice::{Notice, STUDENT_ADDED, STUDENT_UPDATED};
use super::submit::{SubmitGate, SubmitState};
use crate::auth::{AuthProvider, UserRef};
use crate::observability::Event;
use crate::roster::{Overview, RosterQuery, SortSpec};
use crate::store::{StoreError, StudentStore};
use crate::student::{StudentForm, StudentId, StudentProfile, StudentRecord, StudentValidator};

/// Result of a successful submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub id: StudentId,
    /// The stored row; present for inserts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<StudentRecord>,
    pub notice: Notice,
    /// Collection re-fetched after the save; `None` if the re-fetch failed
    pub students: Option<Vec<StudentRecord>>,
}

pub struct Dashboard {
    store: Arc<dyn StudentStore>,
    auth: Arc<dyn AuthProvider>,
    clock: Arc<dyn Clock>,
    validator: StudentValidator,
    gate: SubmitGate,
}

impl Dashboard {
    pub fn new(store: Arc<dyn StudentStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            store,
            auth,
            clock: Arc::new(SystemClock),
            validator: StudentValidator::new(),
            gate: SubmitGate::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn current_user(&self) -> Option<UserRef> {
        self.auth.current_user()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> DashboardResult<UserRef> {
        Ok(self.auth.sign_in(email, password).await?)
    }

    pub async fn sign_out(&self) -> DashboardResult<()> {
        Ok(self.auth.sign_out().await?)
    }

    pub fn submit_state(&self) -> SubmitState {
        self.gate.state()
    }

    /// Summary statistics over the whole collection
    pub async fn overview(&self) -> DashboardResult<Overview> {
        self.require_user()?;
        let records = self.fetch(&SortSpec::default()).await?;
        let overview = Overview::compute(&records, self.clock.current_year());
        info!(
            event = %Event::OverviewComputed,
            total = overview.total_count,
            graduating = overview.graduating_this_year,
            "overview computed"
        );
        Ok(overview)
    }

    /// Visible rows for the listing view
    pub async fn list(&self, query: &RosterQuery) -> DashboardResult<Vec<StudentRecord>> {
        self.require_user()?;
        let records = self.fetch(&query.sort).await?;
        Ok(query.apply(&records))
    }

    /// Default draft for the "add student" form
    pub fn blank_form(&self) -> StudentForm {
        StudentForm::blank(self.clock.today())
    }

    /// Edit form seeded from the stored row `id`
    pub async fn edit_form(&self, id: &StudentId) -> DashboardResult<StudentForm> {
        self.require_user()?;
        let records = self.fetch(&SortSpec::default()).await?;
        records
            .iter()
            .find(|record| &record.id == id)
            .map(StudentForm::from_record)
            .ok_or_else(|| DashboardError::Fetch(StoreError::NotFound(id.clone())))
    }

    /// Validates without touching the store or requiring sign-in
    pub fn validate(&self, form: &StudentForm) -> DashboardResult<StudentProfile> {
        Ok(self.validator.validate(form)?)
    }

    /// Validates `form`, then inserts it (no `id`) or updates row `id`, then
    /// re-fetches the collection.
    pub async fn submit(
        &self,
        form: &StudentForm,
        id: Option<StudentId>,
    ) -> DashboardResult<SubmitOutcome> {
        let user = self.require_user()?;

        let profile = self.validator.validate(form).map_err(|errors| {
            info!(event = %Event::SubmitInvalid, fields = ?errors.fields(), "submission blocked");
            DashboardError::Validation(errors)
        })?;

        let _guard = self.gate.try_begin().ok_or_else(|| {
            warn!(event = %Event::SubmitBlocked, "submission already in flight");
            DashboardError::SubmitInFlight
        })?;
        info!(event = %Event::SubmitBegin, update = id.is_some(), "submitting student");

        let (id, record, notice) = match id {
            Some(id) => {
                self.store
                    .update(&id, &profile)
                    .await
                    .map_err(DashboardError::Save)?;
                (id, None, Notice::success(STUDENT_UPDATED))
            }
            None => {
                let record = self
                    .store
                    .insert(&profile, Some(&user))
                    .await
                    .map_err(DashboardError::Save)?;
                (record.id.clone(), Some(record), Notice::success(STUDENT_ADDED))
            }
        };

        let students = match self.fetch(&SortSpec::default()).await {
            Ok(students) => Some(students),
            Err(e) => {
                warn!(error = %e, "refresh after save failed");
                None
            }
        };

        info!(event = %Event::SubmitComplete, id = %id, "student saved");
        Ok(SubmitOutcome {
            id,
            record,
            notice,
            students,
        })
    }

    fn require_user(&self) -> DashboardResult<UserRef> {
        self.auth
            .current_user()
            .ok_or(DashboardError::AuthenticationRequired)
    }

    async fn fetch(&self, sort: &SortSpec) -> DashboardResult<Vec<StudentRecord>> {
        self.store.list(sort).await.map_err(|e| {
            warn!(event = %Event::StoreFailed, error = %e, "fetch failed");
            DashboardError::Fetch(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::InMemoryAuthProvider;
    use crate::dashboard::FixedClock;
    use crate::roster::SortField;
    use crate::store::{InMemoryStudentStore, StoreResult};
    use crate::student::fixtures::{profile, record};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use tokio::sync::Notify;

    const EMAIL: &str = "registrar@example.edu";
    const PASSWORD: &str = "correct horse";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    async fn signed_in(store: Arc<dyn StudentStore>) -> Dashboard {
        let auth = Arc::new(InMemoryAuthProvider::new());
        auth.register(EMAIL, PASSWORD).unwrap();
        auth.sign_in(EMAIL, PASSWORD).await.unwrap();
        Dashboard::new(store, auth).with_clock(Arc::new(FixedClock(today())))
    }

    fn valid_form(first: &str, last: &str) -> StudentForm {
        StudentForm::from_record(&StudentRecord::new(StudentId::new("-"), None, profile(first, last)))
    }

    #[tokio::test]
    async fn test_signed_out_is_gated() {
        let store = Arc::new(InMemoryStudentStore::new());
        let dashboard = Dashboard::new(store.clone(), Arc::new(InMemoryAuthProvider::new()));

        assert!(matches!(
            dashboard.overview().await,
            Err(DashboardError::AuthenticationRequired)
        ));
        assert!(matches!(
            dashboard.list(&RosterQuery::default()).await,
            Err(DashboardError::AuthenticationRequired)
        ));
        assert!(matches!(
            dashboard.submit(&valid_form("Amy", "Adams"), None).await,
            Err(DashboardError::AuthenticationRequired)
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_insert_stamps_owner_and_refreshes() {
        let store = Arc::new(InMemoryStudentStore::with_records(vec![record("s-1", "Sam", "Smith")]));
        let dashboard = signed_in(store.clone()).await;
        let owner = dashboard.current_user().unwrap();

        let outcome = dashboard.submit(&valid_form("Amy", "Adams"), None).await.unwrap();

        assert_eq!(outcome.notice, Notice::success("Student added successfully"));
        let saved = outcome.record.unwrap();
        assert_eq!(saved.user_id.as_deref(), Some(owner.id.as_str()));
        let students = outcome.students.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].profile.last_name, "Adams");
        assert_eq!(dashboard.submit_state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = Arc::new(InMemoryStudentStore::with_records(vec![record("s-1", "Sam", "Smith")]));
        let dashboard = signed_in(store.clone()).await;
        let form = valid_form("Sam", "Smith").with("major", "History");

        let outcome = dashboard
            .submit(&form, Some(StudentId::new("s-1")))
            .await
            .unwrap();

        assert_eq!(outcome.notice.message, "Student updated successfully");
        assert!(outcome.record.is_none());
        assert_eq!(store.records()[0].profile.major, "History");
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let store = Arc::new(InMemoryStudentStore::new());
        let dashboard = signed_in(store.clone()).await;
        let form = valid_form("Amy", "Adams").with("email", "not-an-email");

        let err = dashboard.submit(&form, None).await.unwrap_err();

        match err {
            DashboardError::Validation(errors) => assert_eq!(errors.fields(), vec!["email"]),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let store = Arc::new(InMemoryStudentStore::new());
        let dashboard = signed_in(store).await;

        let err = dashboard
            .submit(&valid_form("Amy", "Adams"), Some(StudentId::new("gone")))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
        assert_eq!(err.notice().message, "Student not found; refresh the list");
        assert_eq!(dashboard.submit_state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_store_outage_releases_gate() {
        let store = Arc::new(InMemoryStudentStore::new());
        store.set_outage(Some("offline"));
        let dashboard = signed_in(store.clone()).await;

        let err = dashboard.submit(&valid_form("Amy", "Adams"), None).await.unwrap_err();
        assert!(matches!(err, DashboardError::Save(StoreError::Transport(_))));
        assert_eq!(err.notice().message, "Error saving student");
        assert_eq!(dashboard.submit_state(), SubmitState::Idle);

        let err = dashboard.overview().await.unwrap_err();
        assert_eq!(err.notice().message, "Error fetching students");
    }

    #[tokio::test]
    async fn test_overview_uses_clock_year() {
        let mut graduating = record("s-1", "Sam", "Smith");
        graduating.profile.graduation_year = 2026;
        let mut later = record("s-2", "Amy", "Adams");
        later.profile.graduation_year = 2028;
        let store = Arc::new(InMemoryStudentStore::with_records(vec![graduating, later]));
        let dashboard = signed_in(store).await;

        let overview = dashboard.overview().await.unwrap();
        assert_eq!(overview.total_count, 2);
        assert_eq!(overview.graduating_this_year, 1);
    }

    #[tokio::test]
    async fn test_list_filters_then_sorts() {
        let store = Arc::new(InMemoryStudentStore::with_records(vec![
            record("1", "Sam", "Smith"),
            record("2", "Amy", "Adams"),
            record("3", "Sue", "Jones"),
        ]));
        let dashboard = signed_in(store).await;
        let query = RosterQuery::new("s", SortSpec::desc(SortField::FirstName));

        let rows = dashboard.list(&query).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.profile.first_name.as_str()).collect();
        assert_eq!(names, vec!["Sue", "Sam", "Amy"]);
    }

    #[tokio::test]
    async fn test_blank_form_uses_clock() {
        let dashboard = signed_in(Arc::new(InMemoryStudentStore::new())).await;
        let form = dashboard.blank_form();
        assert_eq!(form.get("enrollment_date").unwrap(), "2026-10-19");
        assert_eq!(form.get("graduation_year").unwrap(), 2030);
    }

    #[tokio::test]
    async fn test_edit_form_round_trips_through_submit() {
        let store = Arc::new(InMemoryStudentStore::with_records(vec![record("s-1", "Sam", "Smith")]));
        let dashboard = signed_in(store.clone()).await;
        let id = StudentId::new("s-1");

        let form = dashboard.edit_form(&id).await.unwrap();
        assert_eq!(form.get("first_name").unwrap(), "Sam");
        assert_eq!(form.get("phone").unwrap(), "");

        dashboard.submit(&form.with("city", "Boston"), Some(id)).await.unwrap();
        let stored = &store.records()[0];
        assert_eq!(stored.profile.city, "Boston");
        assert_eq!(stored.profile.last_name, "Smith");
    }

    #[tokio::test]
    async fn test_edit_form_for_unknown_row() {
        let dashboard = signed_in(Arc::new(InMemoryStudentStore::new())).await;

        let err = dashboard.edit_form(&StudentId::new("gone")).await.unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(StoreError::NotFound(_))));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.notice().message, "Student not found; refresh the list");

        let signed_out = Dashboard::new(
            Arc::new(InMemoryStudentStore::new()),
            Arc::new(InMemoryAuthProvider::new()),
        );
        assert!(matches!(
            signed_out.edit_form(&StudentId::new("s-1")).await,
            Err(DashboardError::AuthenticationRequired)
        ));
    }

    /// Insert blocks until released
    struct HeldStore {
        inner: InMemoryStudentStore,
        release: Notify,
    }

    #[async_trait]
    impl StudentStore for HeldStore {
        async fn list(&self, sort: &SortSpec) -> StoreResult<Vec<StudentRecord>> {
            self.inner.list(sort).await
        }

        async fn insert(
            &self,
            profile: &StudentProfile,
            owner: Option<&UserRef>,
        ) -> StoreResult<StudentRecord> {
            self.release.notified().await;
            self.inner.insert(profile, owner).await
        }

        async fn update(&self, id: &StudentId, profile: &StudentProfile) -> StoreResult<()> {
            self.inner.update(id, profile).await
        }
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight() {
        let store = Arc::new(HeldStore {
            inner: InMemoryStudentStore::new(),
            release: Notify::new(),
        });
        let dashboard = Arc::new(signed_in(store.clone()).await);

        let first = {
            let dashboard = dashboard.clone();
            tokio::spawn(async move { dashboard.submit(&valid_form("Amy", "Adams"), None).await })
        };
        while dashboard.submit_state() != SubmitState::Submitting {
            tokio::task::yield_now().await;
        }

        let second = dashboard.submit(&valid_form("Sam", "Smith"), None).await;
        assert!(matches!(second, Err(DashboardError::SubmitInFlight)));

        store.release.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert_eq!(outcome.students.unwrap().len(), 1);
        assert_eq!(dashboard.submit_state(), SubmitState::Idle);
    }
}
