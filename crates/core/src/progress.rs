use serde::{Deserialize, Serialize};

/// One day of the activity heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    pub lessons_completed: u32,
    /// Minutes spent that day.
    pub time_spent: u32,
}
