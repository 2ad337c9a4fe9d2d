//! Record Id Generation
//!
//! Ids are millisecond timestamps, bumped past the last issued value so
//! two submissions in the same millisecond still get distinct ids.

use chrono::Utc;

use crate::domain::RecordId;

/// Issues strictly increasing, timestamp-shaped record ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never issue an id at or below one already in use
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id.get());
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> RecordId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id given `now` in milliseconds
    pub fn next_at(&mut self, now_millis: i64) -> RecordId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        RecordId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_still_unique() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);
        assert_eq!(a, RecordId(1_000));
        assert_eq!(b, RecordId(1_001));
        assert_eq!(c, RecordId(1_002));
    }

    #[test]
    fn test_follows_clock_when_it_moves_ahead() {
        let mut ids = IdGenerator::new();
        ids.next_at(1_000);
        assert_eq!(ids.next_at(5_000), RecordId(5_000));
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        ids.observe(RecordId(10_000));
        ids.observe(RecordId(2_000));
        assert_eq!(ids.next_at(3_000), RecordId(10_001));
    }

    #[test]
    fn test_wall_clock_ids_increase() {
        let mut ids = IdGenerator::new();
        let issued: Vec<RecordId> = (0..100).map(|_| ids.next_id()).collect();
        assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
