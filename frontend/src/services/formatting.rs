//! Display strings for API values.

use shared::{ActiveGoal, BodyStatEntry, Goal, LastWorkout};

use super::date_utils::format_display_date;

pub const NO_DATA: &str = "No data yet.";

pub fn format_weight(weight: Option<f64>) -> String {
    match weight {
        Some(kg) => format!("{} kg", kg),
        None => "-".to_string(),
    }
}

/// Recorded measurements only, e.g. "Weight: 72.5 kg, Waist: 80 cm"
pub fn describe_body_stat(entry: &BodyStatEntry) -> String {
    let mut parts = Vec::new();
    if let Some(weight) = entry.weight {
        parts.push(format!("Weight: {} kg", weight));
    }
    if let Some(fat) = entry.body_fat_percent {
        parts.push(format!("Body fat: {}%", fat));
    }
    if let Some(muscle) = entry.muscle_mass {
        parts.push(format!("Muscle: {} kg", muscle));
    }
    if let Some(waist) = entry.waist_circumference {
        parts.push(format!("Waist: {} cm", waist));
    }
    parts.join(", ")
}

pub fn describe_goal(goal: &Goal) -> String {
    let deadline = goal
        .deadline
        .as_deref()
        .map(|d| format!(" (Deadline: {})", format_display_date(d)))
        .unwrap_or_default();
    let status = if goal.is_achieved { " ✓ Done" } else { "" };
    format!("{}: {}{}{}", goal.goal_type, goal.target_value, deadline, status)
}

pub fn describe_last_workout(workout: Option<&LastWorkout>) -> String {
    match workout {
        Some(w) => format!("{} ({})", w.exercise, format_display_date(&w.date)),
        None => NO_DATA.to_string(),
    }
}

pub fn describe_active_goal(goal: Option<&ActiveGoal>) -> String {
    match goal {
        Some(g) => format!("{}: {} ({})", g.goal_type, g.target, g.deadline),
        None => NO_DATA.to_string(),
    }
}

pub fn describe_latest_weight(weight: Option<f64>) -> String {
    weight.map(|kg| format!("{} kg", kg)).unwrap_or_else(|| NO_DATA.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(weight: Option<f64>, fat: Option<f64>, muscle: Option<f64>, waist: Option<f64>) -> BodyStatEntry {
        BodyStatEntry {
            date: "2025-03-01".to_string(),
            weight,
            body_fat_percent: fat,
            muscle_mass: muscle,
            waist_circumference: waist,
        }
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(Some(42.5)), "42.5 kg");
        assert_eq!(format_weight(Some(60.0)), "60 kg");
        assert_eq!(format_weight(None), "-");
    }

    #[test]
    fn test_describe_body_stat_skips_missing_fields() {
        assert_eq!(
            describe_body_stat(&stat(Some(72.5), None, None, Some(80.0))),
            "Weight: 72.5 kg, Waist: 80 cm"
        );
        assert_eq!(
            describe_body_stat(&stat(Some(70.0), Some(18.0), Some(32.0), None)),
            "Weight: 70 kg, Body fat: 18%, Muscle: 32 kg"
        );
        assert_eq!(describe_body_stat(&stat(None, None, None, None)), "");
    }

    #[test]
    fn test_describe_goal() {
        let mut goal = Goal {
            id: 3,
            goal_type: "Weight Loss".to_string(),
            target_value: 70.0,
            current_value: None,
            deadline: Some("2025-06-01".to_string()),
            is_achieved: false,
        };
        assert_eq!(describe_goal(&goal), "Weight Loss: 70 (Deadline: June 1, 2025)");

        goal.deadline = None;
        goal.is_achieved = true;
        assert_eq!(describe_goal(&goal), "Weight Loss: 70 ✓ Done");
    }

    #[test]
    fn test_dashboard_descriptions() {
        let workout = LastWorkout {
            date: "2025-03-01 10:15".to_string(),
            exercise: "Squat".to_string(),
            sets: 5,
            reps: 5,
        };
        assert_eq!(describe_last_workout(Some(&workout)), "Squat (March 1, 2025)");
        assert_eq!(describe_last_workout(None), NO_DATA);

        let goal = ActiveGoal {
            goal_type: "Bench Press".to_string(),
            target: 100.0,
            deadline: "2025-09-01".to_string(),
        };
        assert_eq!(describe_active_goal(Some(&goal)), "Bench Press: 100 (2025-09-01)");
        assert_eq!(describe_latest_weight(Some(71.2)), "71.2 kg");
        assert_eq!(describe_latest_weight(None), NO_DATA);
    }
}
