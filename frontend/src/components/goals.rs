use shared::{CreateGoalRequest, Goal, UserId};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::flash_message::FlashBanner;
use crate::hooks::{use_flash, use_session, FlashMessage};
use crate::services::form_utils::{parse_optional_date, parse_required_number, require_text};
use crate::services::formatting::describe_goal;
use crate::services::{ApiClient, Logger};

#[derive(Properties, PartialEq)]
pub struct GoalsProps {
    pub api_client: ApiClient,
    pub flash_timeout_ms: u32,
}

fn build_request(user_id: UserId, goal_type: &str, target: &str, deadline: &str) -> Result<CreateGoalRequest, String> {
    Ok(CreateGoalRequest {
        user_id,
        goal_type: require_text(goal_type, "Goal type")?,
        target_value: parse_required_number(target, "Target value")?,
        deadline: parse_optional_date(deadline, "Deadline")?,
    })
}

fn goal_class(goal: &Goal) -> &'static str {
    if goal.is_achieved {
        "goal-completed"
    } else {
        "goal-active"
    }
}

#[function_component(Goals)]
pub fn goals(props: &GoalsProps) -> Html {
    let session = use_session();
    let user_id = session.as_ref().and_then(|s| s.user_id());
    let flash = use_flash(props.flash_timeout_ms);
    let goals = use_state(|| None::<Result<Vec<Goal>, String>>);
    let revision = use_state(|| 0u32);
    let goal_type = use_state(String::new);
    let target = use_state(String::new);
    let deadline = use_state(String::new);
    let submitting = use_state(|| false);

    {
        let api_client = props.api_client.clone();
        let goals = goals.clone();
        use_effect_with((user_id, *revision), move |(user_id, _)| {
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    match api_client.goals(user_id).await {
                        Ok(response) => goals.set(Some(Ok(response.goals))),
                        Err(e) => {
                            Logger::error_with_component("goals", &format!("Failed to load goals: {}", e));
                            goals.set(Some(Err(e.to_string())));
                        }
                    }
                });
            }
            || ()
        });
    }

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let goal_type = goal_type.clone();
        let target = target.clone();
        let deadline = deadline.clone();
        let revision = revision.clone();
        let submitting = submitting.clone();
        let show = flash.show.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(user_id) = user_id else {
                show.emit(FlashMessage::error("Please login first"));
                return;
            };

            let request = match build_request(user_id, &goal_type, &target, &deadline) {
                Ok(request) => request,
                Err(message) => {
                    show.emit(FlashMessage::error(message));
                    return;
                }
            };

            let api_client = api_client.clone();
            let (goal_type, target, deadline) = (goal_type.clone(), target.clone(), deadline.clone());
            let revision = revision.clone();
            let submitting = submitting.clone();
            let show = show.clone();
            submitting.set(true);
            spawn_local(async move {
                match api_client.create_goal(&request).await {
                    Ok(response) => {
                        Logger::info_with_component("goals", &format!("Created goal {}", response.goal_id));
                        show.emit(FlashMessage::success(response.message));
                        goal_type.set(String::new());
                        target.set(String::new());
                        deadline.set(String::new());
                        revision.set(*revision + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component("goals", &format!("Failed to create goal: {}", e));
                        show.emit(FlashMessage::error(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let list = match &*goals {
        None => html! { <li class="loading">{"Loading goals..."}</li> },
        Some(Err(message)) => html! { <li class="error">{format!("Error loading goals: {}", message)}</li> },
        Some(Ok(goals)) if goals.is_empty() => html! { <li class="empty-state">{"No goals set yet."}</li> },
        Some(Ok(goals)) => html! {
            {for goals.iter().map(|goal| html! {
                <li key={goal.id} class={goal_class(goal)}>{describe_goal(goal)}</li>
            })}
        },
    };

    html! {
        <section class="goals-section">
            <h2>{"Goals"}</h2>
            <FlashBanner message={flash.message.clone()} />
            <form class="goals-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="goalType">{"Goal"}</label>
                    <input type="text" id="goalType" placeholder="Weight Loss, Bench Press..."
                        value={(*goal_type).clone()} onchange={bind(&goal_type)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="targetValue">{"Target value"}</label>
                    <input type="number" id="targetValue" step="0.1" value={(*target).clone()}
                        onchange={bind(&target)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="deadline">{"Deadline (optional)"}</label>
                    <input type="date" id="deadline" value={(*deadline).clone()}
                        onchange={bind(&deadline)} disabled={*submitting} />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Saving..." } else { "Add Goal" }}
                </button>
            </form>
            <ul id="goalsList" class="goals-list">
                {list}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request() {
        let request = build_request(9, "Bench Press", "100", "2025-09-01").unwrap();
        assert_eq!(request.goal_type, "Bench Press");
        assert_eq!(request.target_value, 100.0);
        assert_eq!(request.deadline.as_deref(), Some("2025-09-01"));

        let request = build_request(9, "Weight Loss", "70.5", "").unwrap();
        assert_eq!(request.deadline, None);
    }

    #[test]
    fn test_build_request_rejects_bad_input() {
        assert!(build_request(9, "", "100", "").is_err());
        assert!(build_request(9, "Run", "fast", "").is_err());
        assert!(build_request(9, "Run", "5", "next week").is_err());
    }

    #[test]
    fn test_goal_class() {
        let mut goal = Goal {
            id: 1,
            goal_type: "Squat".to_string(),
            target_value: 120.0,
            current_value: Some(100.0),
            deadline: None,
            is_achieved: false,
        };
        assert_eq!(goal_class(&goal), "goal-active");
        goal.is_achieved = true;
        assert_eq!(goal_class(&goal), "goal-completed");
    }
}
