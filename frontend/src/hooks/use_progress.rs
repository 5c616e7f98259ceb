use shared::{ProgressRequest, ProgressSample, UserId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, LatestRequest, Logger};

const COMPONENT: &str = "use_progress";

/// What the progress page should show for the current selection
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressView {
    /// No exercise selected
    Idle,
    Loading { exercise: String },
    Loaded { exercise: String, series: Vec<ProgressSample> },
    Failed { exercise: String, message: String },
}

impl ProgressView {
    pub fn status_text(&self) -> Option<String> {
        match self {
            ProgressView::Idle | ProgressView::Loaded { .. } => None,
            ProgressView::Loading { .. } => Some("Loading progress data...".to_string()),
            ProgressView::Failed { message, .. } => Some(format!("Error: {}", message)),
        }
    }

    pub fn selected_exercise(&self) -> Option<&str> {
        match self {
            ProgressView::Idle => None,
            ProgressView::Loading { exercise }
            | ProgressView::Loaded { exercise, .. }
            | ProgressView::Failed { exercise, .. } => Some(exercise),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseOptions {
    Loading,
    /// Distinct exercises from the user's history, empty when nothing is logged
    Ready(Vec<String>),
    Failed(String),
}

pub struct UseProgressResult {
    pub exercises: ExerciseOptions,
    pub view: ProgressView,
    /// Select an exercise by name; an empty name clears the selection
    pub select: Callback<String>,
}

#[hook]
pub fn use_progress(api_client: &ApiClient, user_id: Option<UserId>) -> UseProgressResult {
    let exercises = use_state(|| ExerciseOptions::Loading);
    let view = use_state(|| ProgressView::Idle);
    let latest = use_mut_ref(LatestRequest::new);

    // Exercise list comes from the user's own history, not the whole library
    {
        let api_client = api_client.clone();
        let exercises = exercises.clone();

        use_effect_with(user_id, move |user_id| {
            if let Some(user_id) = *user_id {
                exercises.set(ExerciseOptions::Loading);
                spawn_local(async move {
                    match api_client.workout_history(user_id).await {
                        Ok(history) => {
                            let names = history.distinct_exercises();
                            Logger::debug_with_component(
                                COMPONENT,
                                &format!("Found {} distinct exercises for user {}", names.len(), user_id),
                            );
                            exercises.set(ExerciseOptions::Ready(names));
                        }
                        Err(e) => {
                            Logger::error_with_component(COMPONENT, &format!("Failed to load workout history: {}", e));
                            exercises.set(ExerciseOptions::Failed(e.to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let select = {
        let api_client = api_client.clone();
        let view = view.clone();
        let latest = latest.clone();

        use_callback(user_id, move |exercise: String, user_id| {
            let Some(user_id) = *user_id else {
                return;
            };

            if exercise.is_empty() {
                latest.borrow_mut().clear();
                view.set(ProgressView::Idle);
                return;
            }

            let ticket = latest.borrow_mut().begin(&exercise);
            view.set(ProgressView::Loading {
                exercise: exercise.clone(),
            });

            let api_client = api_client.clone();
            let view = view.clone();
            let latest = latest.clone();
            spawn_local(async move {
                let request = ProgressRequest {
                    user_id,
                    exercise_name: exercise.clone(),
                };
                let result = api_client.progress(&request).await;

                if !latest.borrow().is_current(&ticket) {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Discarding stale progress response for {}", ticket.selection()),
                    );
                    return;
                }

                match result {
                    Ok(response) => view.set(ProgressView::Loaded {
                        exercise,
                        series: response.progress,
                    }),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to load progress for {}: {}", exercise, e));
                        view.set(ProgressView::Failed {
                            exercise,
                            message: e.to_string(),
                        });
                    }
                }
            });
        })
    };

    UseProgressResult {
        exercises: (*exercises).clone(),
        view: (*view).clone(),
        select,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(ProgressView::Idle.status_text(), None);
        assert_eq!(
            ProgressView::Loading {
                exercise: "Squat".into()
            }
            .status_text(),
            Some("Loading progress data...".to_string())
        );
        assert_eq!(
            ProgressView::Failed {
                exercise: "Squat".into(),
                message: "Exercise not found".into()
            }
            .status_text(),
            Some("Error: Exercise not found".to_string())
        );
    }

    #[test]
    fn test_selected_exercise() {
        assert_eq!(ProgressView::Idle.selected_exercise(), None);
        let loaded = ProgressView::Loaded {
            exercise: "Deadlift".into(),
            series: vec![],
        };
        assert_eq!(loaded.selected_exercise(), Some("Deadlift"));
    }
}
