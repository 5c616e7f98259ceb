use shared::DashboardSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::formatting::{describe_active_goal, describe_last_workout, describe_latest_weight};
use crate::services::{ApiClient, Logger};

#[derive(Properties, PartialEq)]
pub struct DashboardSummaryProps {
    pub api_client: ApiClient,
}

#[function_component(DashboardSummaryView)]
pub fn dashboard_summary(props: &DashboardSummaryProps) -> Html {
    let session = use_session();
    let user_id = session.as_ref().and_then(|s| s.user_id());
    let summary = use_state(|| None::<Result<DashboardSummary, String>>);

    {
        let api_client = props.api_client.clone();
        let summary = summary.clone();
        use_effect_with(user_id, move |user_id| {
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    match api_client.dashboard(user_id).await {
                        Ok(data) => summary.set(Some(Ok(data))),
                        Err(e) => {
                            Logger::error_with_component("dashboard", &format!("Failed to load dashboard: {}", e));
                            summary.set(Some(Err(e.to_string())));
                        }
                    }
                });
            }
            || ()
        });
    }

    let body = match &*summary {
        None => html! { <p class="loading">{"Loading dashboard..."}</p> },
        Some(Err(message)) => html! { <p class="message error">{format!("Error loading dashboard: {}", message)}</p> },
        Some(Ok(data)) => html! {
            <div class="dashboard-cards">
                <div class="card">
                    <h3>{"Total Workouts"}</h3>
                    <p id="totalWorkouts">{data.total_workouts}</p>
                </div>
                <div class="card">
                    <h3>{"Last Workout"}</h3>
                    <p id="lastWorkout">{describe_last_workout(data.last_workout.as_ref())}</p>
                </div>
                <div class="card">
                    <h3>{"Latest Weight"}</h3>
                    <p id="latestWeight">{describe_latest_weight(data.latest_weight)}</p>
                </div>
                <div class="card">
                    <h3>{"Active Goal"}</h3>
                    <p id="activeGoal">{describe_active_goal(data.active_goal.as_ref())}</p>
                </div>
            </div>
        },
    };

    html! {
        <section class="dashboard-section">
            <h2>{"Dashboard"}</h2>
            {body}
        </section>
    }
}
