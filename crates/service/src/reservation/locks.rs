//! Per-(room, date) write serialization.
//!
//! Holding the guard across the conflict check and the write keeps two
//! requests in this process from booking the same window concurrently.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct SlotLocks {
    inner: DashMap<(String, NaiveDate), Arc<Mutex<()>>>,
}

impl SlotLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, room: &str, date: NaiveDate) -> OwnedMutexGuard<()> {
        let lock = self
            .inner
            .entry((room.to_string(), date))
            .or_default()
            .clone();
        lock.lock_owned().await
    }

    /// Drop entries nobody is holding or waiting on.
    pub fn prune(&self) {
        self.inner.retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[tokio::test]
    async fn same_slot_is_exclusive() {
        let locks = Arc::new(SlotLocks::new());
        let guard = locks.acquire("A1", day()).await;

        let contender = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _g = locks.acquire("A1", day()).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn different_slots_do_not_block() {
        let locks = SlotLocks::new();
        let _a = locks.acquire("A1", day()).await;
        let other = tokio::time::timeout(Duration::from_millis(200), locks.acquire("B2", day())).await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn prune_keeps_held_entries() {
        let locks = SlotLocks::new();
        let held = locks.acquire("A1", day()).await;
        drop(locks.acquire("B2", day()).await);
        locks.prune();
        assert_eq!(locks.len(), 1);
        drop(held);
        locks.prune();
        assert!(locks.is_empty());
    }
}
