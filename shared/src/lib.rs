use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numeric user id issued by the API on registration/login
pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: UserId,
}

/// Names of every exercise in the workout library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseListResponse {
    #[serde(default)]
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogRequest {
    pub user_id: UserId,
    /// Must match an entry of the workout library
    pub exercise_name: String,
    pub sets: u32,
    pub reps: u32,
    /// Load in kg; `None` for bodyweight exercises
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogResponse {
    pub message: String,
    pub workout_id: i64,
}

/// One logged workout as returned by the history endpoint (newest first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistoryEntry {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistoryResponse {
    #[serde(default)]
    pub history: Vec<WorkoutHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRequest {
    pub user_id: UserId,
    pub exercise_name: String,
}

/// Total training volume (sets * reps * weight) for one exercise on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSample {
    /// Calendar date of the session(s), parseable by [`ProgressSample::calendar_date`]
    pub date: String,
    /// `None` when no weighted set was recorded that day
    pub total_volume: Option<f64>,
}

/// Chronologically ascending progress series for one (user, exercise) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    #[serde(default)]
    pub progress: Vec<ProgressSample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStatRequest {
    pub user_id: UserId,
    pub weight: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist_circumference: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStatResponse {
    pub message: String,
    pub stat_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStatEntry {
    pub date: String,
    pub weight: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist_circumference: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStatHistoryResponse {
    #[serde(default)]
    pub stats_history: Vec<BodyStatEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub user_id: UserId,
    /// Free-form goal category, e.g. "Weight Loss"
    pub goal_type: String,
    pub target_value: f64,
    /// Optional `YYYY-MM-DD` deadline
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalResponse {
    pub message: String,
    pub goal_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: Option<f64>,
    pub deadline: Option<String>,
    pub is_achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    #[serde(default)]
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastWorkout {
    /// `YYYY-MM-DD HH:MM`
    pub date: String,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveGoal {
    #[serde(rename = "type")]
    pub goal_type: String,
    pub target: f64,
    /// Deadline, or a sentinel string when the goal has none
    pub deadline: String,
}

/// Summary cards on the dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_workouts: u64,
    pub last_workout: Option<LastWorkout>,
    pub latest_weight: Option<f64>,
    pub active_goal: Option<ActiveGoal>,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

impl ProgressSample {
    pub fn new(date: impl Into<String>, total_volume: Option<f64>) -> Self {
        Self {
            date: date.into(),
            total_volume,
        }
    }

    /// The volume if this sample can be plotted: present, finite and positive
    pub fn valid_volume(&self) -> Option<f64> {
        self.total_volume.filter(|v| v.is_finite() && *v > 0.0)
    }

    pub fn is_valid(&self) -> bool {
        self.valid_volume().is_some()
    }

    /// Parse the sample date.
    ///
    /// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps and the
    /// `YYYY-MM-DD HH:MM` form used by the dashboard summary.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

/// Parse the leading calendar date out of an API date/timestamp string
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    // Timestamps without offset ("2025-03-01T10:00:00", "2025-03-01 10:00")
    raw.get(..10)
        .filter(|_| matches!(raw.as_bytes().get(10), Some(b'T') | Some(b' ')))
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

impl ProgressResponse {
    /// Number of samples that carry a plottable volume
    pub fn valid_sample_count(&self) -> usize {
        self.progress.iter().filter(|s| s.is_valid()).count()
    }
}

impl WorkoutHistoryResponse {
    /// Each exercise name once, in the order it first appears in the history
    pub fn distinct_exercises(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for entry in &self.history {
            if !seen.iter().any(|name| name == &entry.exercise) {
                seen.push(entry.exercise.clone());
            }
        }
        seen
    }
}

impl BodyStatEntry {
    /// True when at least one measurement was recorded
    pub fn has_measurements(&self) -> bool {
        self.weight.is_some()
            || self.body_fat_percent.is_some()
            || self.muscle_mass.is_some()
            || self.waist_circumference.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_response_with_null_volume() {
        let json = r#"{"progress":[
            {"date":"2025-03-01","total_volume":1200.0},
            {"date":"2025-03-03","total_volume":null},
            {"date":"2025-03-05","total_volume":1500.5}
        ]}"#;

        let response: ProgressResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.progress.len(), 3);
        assert_eq!(response.progress[1].total_volume, None);
        assert_eq!(response.valid_sample_count(), 2);
    }

    #[test]
    fn test_progress_response_missing_field_is_empty() {
        let response: ProgressResponse = serde_json::from_str("{}").unwrap();
        assert!(response.progress.is_empty());
    }

    #[test]
    fn test_valid_volume() {
        assert_eq!(ProgressSample::new("2025-03-01", Some(10.0)).valid_volume(), Some(10.0));
        assert_eq!(ProgressSample::new("2025-03-01", Some(0.0)).valid_volume(), None);
        assert_eq!(ProgressSample::new("2025-03-01", Some(-5.0)).valid_volume(), None);
        assert_eq!(ProgressSample::new("2025-03-01", None).valid_volume(), None);
        assert_eq!(ProgressSample::new("2025-03-01", Some(f64::NAN)).valid_volume(), None);
    }

    #[test]
    fn test_calendar_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        assert_eq!(parse_calendar_date("2025-03-01"), Some(expected));
        assert_eq!(parse_calendar_date("2025-03-01T08:30:00Z"), Some(expected));
        assert_eq!(parse_calendar_date("2025-03-01T08:30:00-05:00"), Some(expected));
        assert_eq!(parse_calendar_date("2025-03-01 08:30"), Some(expected));
        assert_eq!(parse_calendar_date("2025-03-01T08:30:00"), Some(expected));

        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date("2025-13-01"), None);
        assert_eq!(parse_calendar_date("2025-03-01garbage"), None);
    }

    #[test]
    fn test_distinct_exercises_keeps_first_seen_order() {
        let entry = |exercise: &str| WorkoutHistoryEntry {
            date: "2025-03-01".to_string(),
            exercise: exercise.to_string(),
            sets: 3,
            reps: 10,
            weight: Some(40.0),
        };
        let history = WorkoutHistoryResponse {
            history: vec![entry("Squat"), entry("Bench Press"), entry("Squat"), entry("Deadlift")],
        };

        assert_eq!(history.distinct_exercises(), vec!["Squat", "Bench Press", "Deadlift"]);
    }

    #[test]
    fn test_active_goal_uses_type_key() {
        let json = r#"{
            "total_workouts": 4,
            "last_workout": {"date":"2025-03-01 10:15","exercise":"Squat","sets":5,"reps":5},
            "latest_weight": 72.5,
            "active_goal": {"type":"Weight Loss","target":70.0,"deadline":"2025-06-01"}
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_workouts, 4);
        assert_eq!(summary.active_goal.unwrap().goal_type, "Weight Loss");
        assert_eq!(summary.last_workout.unwrap().exercise, "Squat");
    }

    #[test]
    fn test_workout_log_request_serializes_null_weight() {
        let request = WorkoutLogRequest {
            user_id: 7,
            exercise_name: "Push Up".to_string(),
            sets: 3,
            reps: 15,
            weight: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value["weight"].is_null());
        assert_eq!(value["exercise_name"], "Push Up");
    }

    #[test]
    fn test_body_stat_has_measurements() {
        let mut entry = BodyStatEntry {
            date: "2025-03-01".to_string(),
            weight: None,
            body_fat_percent: None,
            muscle_mass: None,
            waist_circumference: None,
        };
        assert!(!entry.has_measurements());

        entry.waist_circumference = Some(82.0);
        assert!(entry.has_measurements());
    }
}
