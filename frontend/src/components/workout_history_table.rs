use shared::WorkoutHistoryEntry;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::date_utils::format_display_date;
use crate::services::formatting::format_weight;
use crate::services::{ApiClient, Logger};

#[derive(Properties, PartialEq)]
pub struct WorkoutHistoryTableProps {
    pub api_client: ApiClient,
}

#[function_component(WorkoutHistoryTable)]
pub fn workout_history_table(props: &WorkoutHistoryTableProps) -> Html {
    let session = use_session();
    let user_id = session.as_ref().and_then(|s| s.user_id());
    let history = use_state(|| None::<Result<Vec<WorkoutHistoryEntry>, String>>);

    {
        let api_client = props.api_client.clone();
        let history = history.clone();
        use_effect_with(user_id, move |user_id| {
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    match api_client.workout_history(user_id).await {
                        Ok(response) => history.set(Some(Ok(response.history))),
                        Err(e) => {
                            Logger::error_with_component("workout_history", &format!("Failed to load history: {}", e));
                            history.set(Some(Err(e.to_string())));
                        }
                    }
                });
            }
            || ()
        });
    }

    let rows = match &*history {
        None => html! {
            <tr><td colspan="5" class="loading">{"Loading workouts..."}</td></tr>
        },
        Some(Err(message)) => html! {
            <tr><td colspan="5" class="error">{format!("Error loading history: {}", message)}</td></tr>
        },
        Some(Ok(entries)) if entries.is_empty() => html! {
            <tr><td colspan="5" class="empty-state">{"No workouts logged yet."}</td></tr>
        },
        Some(Ok(entries)) => html! {
            {for entries.iter().map(|entry| html! {
                <tr>
                    <td>{format_display_date(&entry.date)}</td>
                    <td>{&entry.exercise}</td>
                    <td>{entry.sets}</td>
                    <td>{entry.reps}</td>
                    <td>{format_weight(entry.weight)}</td>
                </tr>
            })}
        },
    };

    html! {
        <section class="history-section">
            <h2>{"Workout History"}</h2>
            <table class="history-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Exercise"}</th>
                        <th>{"Sets"}</th>
                        <th>{"Reps"}</th>
                        <th>{"Weight"}</th>
                    </tr>
                </thead>
                <tbody id="historyTableBody">
                    {rows}
                </tbody>
            </table>
        </section>
    }
}
