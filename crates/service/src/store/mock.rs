//! In-memory stores for service tests and handler tests.
//!
//! Failure switches let callers exercise the error paths a real database
//! only produces under duress.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use models::inquiry::{self, ValidInquiry};
use models::listing::{self, ValidListing};

use super::{RecordStore, StoreError};
use crate::inquiry::repository::InquiryFilter;
use crate::pagination::Pagination;

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    m.lock().map_err(|_| StoreError::Backend("memory store lock poisoned".into()))
}

fn simulated(op: &str) -> StoreError { StoreError::Backend(format!("simulated {op} failure")) }

#[derive(Default)]
pub struct MemoryListingStore {
    rows: Mutex<Vec<listing::Model>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    blind_lookups: AtomicBool,
    lookups: AtomicUsize,
    inserts: AtomicUsize,
}

impl MemoryListingStore {
    pub fn new() -> Self { Self::default() }

    /// Every insert fails with a backend error.
    pub fn failing_writes() -> Self {
        let s = Self::default();
        s.fail_writes.store(true, Ordering::SeqCst);
        s
    }

    /// Every lookup and list fails with a backend error.
    pub fn failing_reads() -> Self {
        let s = Self::default();
        s.fail_reads.store(true, Ordering::SeqCst);
        s
    }

    /// `find_by_key` always reports "absent", as if a concurrent writer had
    /// not committed yet when the pre-check ran.
    pub fn blind_lookups() -> Self {
        let s = Self::default();
        s.blind_lookups.store(true, Ordering::SeqCst);
        s
    }

    pub fn set_fail_writes(&self, on: bool) { self.fail_writes.store(on, Ordering::SeqCst); }

    pub fn lookup_count(&self) -> usize { self.lookups.load(Ordering::SeqCst) }

    pub fn insert_count(&self) -> usize { self.inserts.load(Ordering::SeqCst) }

    pub fn len(&self) -> usize { self.rows.lock().map(|r| r.len()).unwrap_or_default() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[async_trait]
impl RecordStore for MemoryListingStore {
    type Record = listing::Model;
    type Key = str;
    type New = ValidListing;
    type Filter = ();

    async fn find_by_key(&self, plot_id: &str) -> Result<Option<listing::Model>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(simulated("read"));
        }
        if self.blind_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(lock(&self.rows)?.iter().find(|l| l.plot_id == plot_id).cloned())
    }

    async fn insert(&self, new: ValidListing) -> Result<listing::Model, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(simulated("write"));
        }
        let mut rows = lock(&self.rows)?;
        if rows.iter().any(|l| l.plot_id == new.plot_id()) {
            return Err(StoreError::Duplicate(format!("listings.plot_id = {}", new.plot_id())));
        }
        let model = new.into_model(Utc::now().into());
        rows.push(model.clone());
        Ok(model)
    }

    async fn list(&self, _filter: &(), page: Pagination) -> Result<Vec<listing::Model>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(simulated("read"));
        }
        Ok(page.window(lock(&self.rows)?.iter().cloned()))
    }
}

pub struct MemoryInquiryStore {
    rows: Mutex<Vec<inquiry::Model>>,
    next_id: AtomicI32,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl Default for MemoryInquiryStore {
    fn default() -> Self {
        Self {
            rows: Mutex::default(),
            next_id: AtomicI32::new(1),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        }
    }
}

impl MemoryInquiryStore {
    pub fn new() -> Self { Self::default() }

    pub fn failing_writes() -> Self {
        let s = Self::default();
        s.fail_writes.store(true, Ordering::SeqCst);
        s
    }

    pub fn failing_reads() -> Self {
        let s = Self::default();
        s.fail_reads.store(true, Ordering::SeqCst);
        s
    }

    pub fn len(&self) -> usize { self.rows.lock().map(|r| r.len()).unwrap_or_default() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[async_trait]
impl RecordStore for MemoryInquiryStore {
    type Record = inquiry::Model;
    type Key = i32;
    type New = ValidInquiry;
    type Filter = InquiryFilter;

    async fn find_by_key(&self, id: &i32) -> Result<Option<inquiry::Model>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(simulated("read"));
        }
        Ok(lock(&self.rows)?.iter().find(|i| i.id == *id).cloned())
    }

    async fn insert(&self, new: ValidInquiry) -> Result<inquiry::Model, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(simulated("write"));
        }
        let mut rows = lock(&self.rows)?;
        // allocated under the lock so ids follow insertion order
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let model = new.into_model(id, Utc::now().into());
        rows.push(model.clone());
        Ok(model)
    }

    async fn list(&self, filter: &InquiryFilter, page: Pagination) -> Result<Vec<inquiry::Model>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(simulated("read"));
        }
        let rows = lock(&self.rows)?;
        Ok(page.window(rows.iter().filter(|i| filter.matches(i)).cloned()))
    }
}
