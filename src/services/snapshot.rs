//! Immutable view of the full calendar state at one point in time.
//!
//! `CalendarStore` fetches a snapshot once per cache window; classification,
//! range analysis and sandwich detection are pure, synchronous functions
//! over it. Year and campus filtering happens here, on the superset.

use chrono::NaiveDate;

use crate::config::SaturdayPolicy;
use crate::models::{Campus, Holiday, SaturdayOverride};
use crate::types::HolidayId;

#[derive(Debug, Clone)]
pub struct CalendarSnapshot {
    holidays: Vec<Holiday>,
    overrides: Vec<SaturdayOverride>,
    saturday_policy: SaturdayPolicy,
}

impl CalendarSnapshot {
    pub fn new(
        holidays: Vec<Holiday>,
        overrides: Vec<SaturdayOverride>,
        saturday_policy: SaturdayPolicy,
    ) -> Self {
        Self {
            holidays,
            overrides,
            saturday_policy,
        }
    }

    pub fn saturday_policy(&self) -> SaturdayPolicy {
        self.saturday_policy
    }

    /// Holidays observed in `year`, recurring ones included.
    pub fn holidays_for_year(&self, year: i32) -> Vec<&Holiday> {
        self.holidays
            .iter()
            .filter(|h| h.observed_in(year))
            .collect()
    }

    /// Holidays falling on `date` that apply to `campus`.
    pub fn holidays_on(&self, date: NaiveDate, campus: &Campus) -> Vec<&Holiday> {
        self.holidays
            .iter()
            .filter(|h| h.falls_on(date) && h.applies_to(campus))
            .collect()
    }

    pub fn find_holiday(&self, id: HolidayId) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.id == id)
    }

    /// The Saturday override in force for `(date, campus)`, if any.
    /// A campus-specific override beats a campus-less one.
    pub fn saturday_override(
        &self,
        date: NaiveDate,
        campus: &Campus,
    ) -> Option<&SaturdayOverride> {
        let mut global = None;
        for record in self
            .overrides
            .iter()
            .filter(|o| o.date == date && o.applies_to(campus))
        {
            if record.campus.is_some() {
                return Some(record);
            }
            global = Some(record);
        }
        global
    }

    /// Number of holiday records held (for cache logging).
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Number of override records held (for cache logging).
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot(holidays: Vec<Holiday>, overrides: Vec<SaturdayOverride>) -> CalendarSnapshot {
        CalendarSnapshot::new(holidays, overrides, SaturdayPolicy::default())
    }

    #[test]
    fn holidays_for_year_includes_recurring() {
        let one_off = Holiday::new(
            date(2026, 10, 20),
            "Founders Day".into(),
            HolidayKind::University,
            false,
            None,
        );
        let recurring = Holiday::new(
            date(2025, 1, 26),
            "Republic Day".into(),
            HolidayKind::National,
            true,
            None,
        );
        let snap = snapshot(vec![one_off, recurring], Vec::new());

        let names: Vec<_> = snap
            .holidays_for_year(2026)
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names, vec!["Founders Day", "Republic Day"]);

        let names: Vec<_> = snap
            .holidays_for_year(2027)
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names, vec!["Republic Day"]);
    }

    #[test]
    fn holidays_on_filters_by_campus() {
        let scoped = Holiday::new(
            date(2026, 4, 14),
            "State Day".into(),
            HolidayKind::State,
            false,
            Some(Campus::from("city")),
        );
        let snap = snapshot(vec![scoped], Vec::new());

        assert_eq!(snap.holidays_on(date(2026, 4, 14), &Campus::from("city")).len(), 1);
        assert!(snap
            .holidays_on(date(2026, 4, 14), &Campus::from("main"))
            .is_empty());
    }

    #[test]
    fn campus_specific_override_beats_global() {
        let saturday = date(2026, 9, 5);
        let global = SaturdayOverride::working(saturday, None);
        let scoped = SaturdayOverride::holiday(saturday, Some(Campus::from("city")));
        let snap = snapshot(Vec::new(), vec![global, scoped]);

        let city = snap
            .saturday_override(saturday, &Campus::from("city"))
            .expect("override");
        assert!(city.is_holiday);

        let main = snap
            .saturday_override(saturday, &Campus::from("main"))
            .expect("override");
        assert!(!main.is_holiday);
    }

    #[test]
    fn saturday_override_is_none_without_records() {
        let snap = snapshot(Vec::new(), Vec::new());
        assert!(snap
            .saturday_override(date(2026, 9, 5), &Campus::from("main"))
            .is_none());
    }

    #[test]
    fn find_holiday_by_id() {
        let holiday = Holiday::new(
            date(2026, 10, 20),
            "Founders Day".into(),
            HolidayKind::University,
            false,
            None,
        );
        let id = holiday.id;
        let snap = snapshot(vec![holiday], Vec::new());

        assert_eq!(snap.find_holiday(id).map(|h| h.name.as_str()), Some("Founders Day"));
        assert!(snap.find_holiday(HolidayId::new()).is_none());
    }
}
