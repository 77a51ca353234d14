//! In-process store with the same contract as the PostgreSQL one.

use crate::error::StoreError;
use crate::model::{Kurban, NewKurban};
use crate::service::KurbanStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryKurbanStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct Inner {
    /// Like SERIAL: never reused, even after delete.
    last_id: i32,
    rows: BTreeMap<i32, Kurban>,
}

impl MemoryKurbanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the database were down.
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().map_err(poisoned)?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store marked unavailable".into()));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".into())
}

#[async_trait]
impl KurbanStore for MemoryKurbanStore {
    async fn list_all(&self) -> Result<Vec<Kurban>, StoreError> {
        self.check()?;
        let guard = self.inner.read().map_err(poisoned)?;
        Ok(guard.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Kurban>, StoreError> {
        self.check()?;
        let guard = self.inner.read().map_err(poisoned)?;
        Ok(guard.rows.get(&id).cloned())
    }

    async fn insert(&self, new: &NewKurban) -> Result<i32, StoreError> {
        self.check()?;
        let mut guard = self.inner.write().map_err(poisoned)?;
        let id = guard.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        guard.last_id = id;
        guard.rows.insert(id, new.clone().into_record(id));
        Ok(id)
    }

    async fn update(&self, id: i32, new: &NewKurban) -> Result<u64, StoreError> {
        self.check()?;
        let mut guard = self.inner.write().map_err(poisoned)?;
        match guard.rows.get_mut(&id) {
            Some(row) => {
                *row = new.clone().into_record(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, StoreError> {
        self.check()?;
        let mut guard = self.inner.write().map_err(poisoned)?;
        Ok(guard.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
