use shared::{UserId, WorkoutLogRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::flash_message::FlashBanner;
use crate::hooks::{use_flash, use_session, FlashMessage};
use crate::services::form_utils::{parse_count, parse_optional_measurement, require_text};
use crate::services::{ApiClient, Logger};

#[derive(Properties, PartialEq)]
pub struct WorkoutLogFormProps {
    pub api_client: ApiClient,
    pub flash_timeout_ms: u32,
}

fn build_request(user_id: UserId, exercise: &str, sets: &str, reps: &str, weight: &str) -> Result<WorkoutLogRequest, String> {
    Ok(WorkoutLogRequest {
        user_id,
        exercise_name: require_text(exercise, "Exercise")?,
        sets: parse_count(sets, "Sets")?,
        reps: parse_count(reps, "Reps")?,
        weight: parse_optional_measurement(weight),
    })
}

#[function_component(WorkoutLogForm)]
pub fn workout_log_form(props: &WorkoutLogFormProps) -> Html {
    let session = use_session();
    let user_id = session.as_ref().and_then(|s| s.user_id());
    let flash = use_flash(props.flash_timeout_ms);
    let exercises = use_state(Vec::<String>::new);
    let exercise = use_state(String::new);
    let sets = use_state(String::new);
    let reps = use_state(String::new);
    let weight = use_state(String::new);
    let submitting = use_state(|| false);

    // Exercise library for the dropdown
    {
        let api_client = props.api_client.clone();
        let exercises = exercises.clone();
        let show = flash.show.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.list_exercises().await {
                    Ok(response) => exercises.set(response.exercises),
                    Err(e) => {
                        Logger::error_with_component("workout_log_form", &format!("Failed to load exercises: {}", e));
                        show.emit(FlashMessage::error(format!("Could not load exercises: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    let on_exercise_change = {
        let exercise = exercise.clone();
        Callback::from(move |e: Event| {
            let input: HtmlSelectElement = e.target_unchecked_into();
            exercise.set(input.value());
        })
    };

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let exercise = exercise.clone();
        let sets = sets.clone();
        let reps = reps.clone();
        let weight = weight.clone();
        let submitting = submitting.clone();
        let show = flash.show.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(user_id) = user_id else {
                show.emit(FlashMessage::error("Please login first"));
                return;
            };

            let request = match build_request(user_id, &exercise, &sets, &reps, &weight) {
                Ok(request) => request,
                Err(message) => {
                    show.emit(FlashMessage::error(message));
                    return;
                }
            };

            let api_client = api_client.clone();
            let (exercise, sets, reps, weight) = (exercise.clone(), sets.clone(), reps.clone(), weight.clone());
            let submitting = submitting.clone();
            let show = show.clone();
            submitting.set(true);
            spawn_local(async move {
                match api_client.log_workout(&request).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            "workout_log_form",
                            &format!("Logged workout {} ({})", response.workout_id, request.exercise_name),
                        );
                        show.emit(FlashMessage::success(response.message));
                        exercise.set(String::new());
                        sets.set(String::new());
                        reps.set(String::new());
                        weight.set(String::new());
                    }
                    Err(e) => {
                        Logger::error_with_component("workout_log_form", &format!("Failed to log workout: {}", e));
                        show.emit(FlashMessage::error(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="workout-log-section">
            <h2>{"Log Workout"}</h2>
            <FlashBanner message={flash.message.clone()} />
            <form class="workout-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="exerciseName">{"Exercise"}</label>
                    <select id="exerciseName" onchange={on_exercise_change} disabled={*submitting}>
                        <option value="" selected={exercise.is_empty()}>{"Select exercise..."}</option>
                        {for exercises.iter().map(|name| html! {
                            <option value={name.clone()} selected={*name == *exercise}>{name}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="sets">{"Sets"}</label>
                    <input type="number" id="sets" min="1" value={(*sets).clone()}
                        onchange={bind(&sets)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="reps">{"Reps"}</label>
                    <input type="number" id="reps" min="1" value={(*reps).clone()}
                        onchange={bind(&reps)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="weight">{"Weight (kg, optional)"}</label>
                    <input type="number" id="weight" step="0.5" min="0" value={(*weight).clone()}
                        onchange={bind(&weight)} disabled={*submitting} />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Logging..." } else { "Log Workout" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_or_zero_weight_is_sent_as_null() {
        let request = build_request(4, "Squat", "5", "5", "").unwrap();
        assert_eq!(request.weight, None);

        let request = build_request(4, "Squat", "5", "5", "0").unwrap();
        assert_eq!(request.weight, None);

        let request = build_request(4, "Squat", "5", "5", "heavy").unwrap();
        assert_eq!(request.weight, None);

        let request = build_request(4, "Squat", "3", "8", "62.5").unwrap();
        assert_eq!(request.weight, Some(62.5));
        assert_eq!((request.sets, request.reps), (3, 8));
    }

    #[test]
    fn test_invalid_counts_are_rejected() {
        assert!(build_request(4, "Squat", "0", "5", "").is_err());
        assert!(build_request(4, "Squat", "5", "", "").is_err());
        assert!(build_request(4, "", "5", "5", "").is_err());
    }
}
