//! In-memory student store for tests and offline use.

use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::StudentStore;
use crate::auth::UserRef;
use crate::roster::{RosterSorter, SortSpec};
use crate::student::{StudentId, StudentProfile, StudentRecord};

/// Student store backed by a `Vec` behind a lock
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    records: RwLock<Vec<StudentRecord>>,
    outage: Mutex<Option<String>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            outage: Mutex::new(None),
        }
    }

    /// Makes every subsequent call fail with `Transport(reason)`; `None` restores service
    pub fn set_outage(&self, reason: Option<&str>) {
        let mut outage = match self.outage.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *outage = reason.map(str::to_string);
    }

    /// Snapshot of stored rows in insertion order
    pub fn records(&self) -> Vec<StudentRecord> {
        match self.records.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        let outage = match self.outage.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match outage.as_ref() {
            Some(reason) => Err(StoreError::Transport(reason.clone())),
            None => Ok(()),
        }
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<StudentRecord>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Transport("Lock poisoned".into()))
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn list(&self, sort: &SortSpec) -> StoreResult<Vec<StudentRecord>> {
        self.check_available()?;
        Ok(RosterSorter::sorted(&self.records(), sort))
    }

    async fn insert(
        &self,
        profile: &StudentProfile,
        owner: Option<&UserRef>,
    ) -> StoreResult<StudentRecord> {
        self.check_available()?;
        let record = StudentRecord::new(
            StudentId::new(Uuid::new_v4().to_string()),
            owner.map(|user| user.id.clone()),
            profile.clone(),
        );
        self.write()?.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &StudentId, profile: &StudentProfile) -> StoreResult<()> {
        self.check_available()?;
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        record.profile = profile.clone();
        Ok(())
    }
}
