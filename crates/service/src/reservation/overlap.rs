//! Time-window overlap detection.
//!
//! Windows are half-open `[start, end)`: a booking ending at 11:00 and one
//! starting at 11:00 do not overlap.

use chrono::{NaiveDate, NaiveTime};

use super::domain::Reservation;

/// Room, date and window a write wants to occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub room: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    pub fn new(room: impl Into<String>, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { room: room.into(), date, start, end }
    }

    /// Whether `existing` occupies the same room and date and intersects this window.
    pub fn conflicts_with(&self, existing: &Reservation) -> bool {
        existing.room == self.room
            && existing.date == self.date
            && overlaps(existing.start_time, existing.end_time, self.start, self.end)
    }
}

#[inline]
pub fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// First record in iteration order that conflicts with `slot`, skipping
/// the record whose id is `exclude_id`.
pub fn find_conflict<'a, I>(records: I, slot: &Slot, exclude_id: Option<i32>) -> Option<&'a Reservation>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    records
        .into_iter()
        .filter(|r| Some(r.id) != exclude_id)
        .find(|r| slot.conflicts_with(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn booked(id: i32, room: &str, start: NaiveTime, end: NaiveTime) -> Reservation {
        Reservation {
            id,
            class_id: 1,
            professor: "Ada Lovelace".into(),
            room: room.into(),
            date: day(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn touching_windows_do_not_overlap() {
        assert!(!overlaps(t(10, 0), t(11, 0), t(11, 0), t(12, 0)));
        assert!(!overlaps(t(11, 0), t(12, 0), t(10, 0), t(11, 0)));
    }

    #[test]
    fn nested_and_partial_windows_overlap() {
        assert!(overlaps(t(10, 0), t(11, 0), t(10, 30), t(10, 45)));
        assert!(overlaps(t(10, 30), t(10, 45), t(10, 0), t(11, 0)));
        assert!(overlaps(t(10, 0), t(11, 0), t(10, 59), t(12, 0)));
        assert!(overlaps(t(10, 0), t(11, 0), t(10, 0), t(11, 0)));
    }

    #[test]
    fn other_rooms_and_dates_never_conflict() {
        let existing = booked(1, "A1", t(10, 0), t(11, 0));
        assert!(!Slot::new("B2", day(), t(10, 0), t(11, 0)).conflicts_with(&existing));
        let next_day = day().succ_opt().unwrap();
        assert!(!Slot::new("A1", next_day, t(10, 0), t(11, 0)).conflicts_with(&existing));
    }

    #[test]
    fn first_conflict_in_store_order() {
        let rows = vec![
            booked(1, "A1", t(8, 0), t(9, 0)),
            booked(2, "A1", t(10, 0), t(11, 0)),
            booked(3, "A1", t(10, 30), t(12, 0)),
        ];
        let slot = Slot::new("A1", day(), t(10, 15), t(10, 45));
        assert_eq!(find_conflict(&rows, &slot, None).map(|r| r.id), Some(2));
        assert_eq!(find_conflict(&rows, &slot, Some(2)).map(|r| r.id), Some(3));
    }

    #[test]
    fn excluded_record_is_ignored() {
        let rows = vec![booked(7, "A1", t(10, 0), t(11, 0))];
        let slot = Slot::new("A1", day(), t(10, 0), t(10, 30));
        assert!(find_conflict(&rows, &slot, Some(7)).is_none());
        assert!(find_conflict(&rows, &slot, None).is_some());
    }
}
