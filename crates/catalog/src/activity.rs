//! Synthetic activity history for the progress heatmap.

use chrono::{DateTime, Duration, Utc};
use cinefluent_core::WeeklyActivity;

/// 35 days of fabricated activity ending yesterday.
///
/// The pattern ramps up over each week (0 lessons on the first day of a
/// cycle, up to 3 on the last) at roughly 20 minutes per lesson. The clock
/// is a parameter so tests get a deterministic series.
pub fn weekly_activity(today: DateTime<Utc>) -> Vec<WeeklyActivity> {
    let start = today - Duration::days(35);

    (0..35)
        .map(|i| {
            let day_in_cycle = i % 7;
            let lessons = if day_in_cycle == 0 {
                0
            } else {
                (3.0 * (0.5 + 0.5 * day_in_cycle as f64 / 6.0)) as u32
            };

            WeeklyActivity {
                date: (start + Duration::days(i)).format("%Y-%m-%d").to_string(),
                lessons_completed: lessons,
                time_spent: lessons * 20,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn series_covers_exactly_35_days() {
        let today = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let series = weekly_activity(today);

        assert_eq!(series.len(), 35);
        assert_eq!(series[0].date, "2024-05-26");
        assert_eq!(series[34].date, "2024-06-29");
    }

    #[test]
    fn every_cycle_starts_with_a_rest_day() {
        let today = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let series = weekly_activity(today);

        for (i, day) in series.iter().enumerate() {
            if i % 7 == 0 {
                assert_eq!(day.lessons_completed, 0);
                assert_eq!(day.time_spent, 0);
            } else {
                assert!(day.lessons_completed >= 1);
                assert_eq!(day.time_spent, day.lessons_completed * 20);
            }
        }
    }

    #[test]
    fn activity_peaks_at_three_lessons() {
        let today = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let series = weekly_activity(today);

        let max = series.iter().map(|d| d.lessons_completed).max().unwrap();
        assert_eq!(max, 3);
        // The peak lands on the last day of each weekly cycle.
        assert_eq!(series[6].lessons_completed, 3);
    }
}
