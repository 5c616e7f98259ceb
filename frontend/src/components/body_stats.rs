use shared::{BodyStatEntry, BodyStatRequest, UserId};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::flash_message::FlashBanner;
use crate::hooks::{use_flash, use_session, FlashMessage};
use crate::services::date_utils::format_display_date;
use crate::services::form_utils::parse_optional_measurement;
use crate::services::formatting::describe_body_stat;
use crate::services::{ApiClient, Logger};

#[derive(Properties, PartialEq)]
pub struct BodyStatsProps {
    pub api_client: ApiClient,
    pub flash_timeout_ms: u32,
}

fn build_request(user_id: UserId, weight: &str, body_fat: &str, muscle: &str, waist: &str) -> Result<BodyStatRequest, String> {
    let request = BodyStatRequest {
        user_id,
        weight: parse_optional_measurement(weight),
        body_fat_percent: parse_optional_measurement(body_fat),
        muscle_mass: parse_optional_measurement(muscle),
        waist_circumference: parse_optional_measurement(waist),
    };
    if request.weight.is_none()
        && request.body_fat_percent.is_none()
        && request.muscle_mass.is_none()
        && request.waist_circumference.is_none()
    {
        return Err("Enter at least one measurement".to_string());
    }
    Ok(request)
}

#[function_component(BodyStats)]
pub fn body_stats(props: &BodyStatsProps) -> Html {
    let session = use_session();
    let user_id = session.as_ref().and_then(|s| s.user_id());
    let flash = use_flash(props.flash_timeout_ms);
    let history = use_state(|| None::<Result<Vec<BodyStatEntry>, String>>);
    // Bumped after each save to reload the history
    let revision = use_state(|| 0u32);
    let weight = use_state(String::new);
    let body_fat = use_state(String::new);
    let muscle = use_state(String::new);
    let waist = use_state(String::new);
    let submitting = use_state(|| false);

    {
        let api_client = props.api_client.clone();
        let history = history.clone();
        use_effect_with((user_id, *revision), move |(user_id, _)| {
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    match api_client.body_stat_history(user_id).await {
                        Ok(response) => history.set(Some(Ok(response.stats_history))),
                        Err(e) => {
                            Logger::error_with_component("body_stats", &format!("Failed to load body stats: {}", e));
                            history.set(Some(Err(e.to_string())));
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
        let fields = [weight.clone(), body_fat.clone(), muscle.clone(), waist.clone()];
        let revision = revision.clone();
        let submitting = submitting.clone();
        let show = flash.show.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(user_id) = user_id else {
                show.emit(FlashMessage::error("Please login first"));
                return;
            };

            let [weight, body_fat, muscle, waist] = &fields;
            let request = match build_request(user_id, weight, body_fat, muscle, waist) {
                Ok(request) => request,
                Err(message) => {
                    show.emit(FlashMessage::error(message));
                    return;
                }
            };

            let api_client = api_client.clone();
            let fields = fields.clone();
            let revision = revision.clone();
            let submitting = submitting.clone();
            let show = show.clone();
            submitting.set(true);
            spawn_local(async move {
                match api_client.log_body_stat(&request).await {
                    Ok(response) => {
                        Logger::info_with_component("body_stats", &format!("Saved body stat {}", response.stat_id));
                        show.emit(FlashMessage::success(response.message));
                        for field in &fields {
                            field.set(String::new());
                        }
                        revision.set(*revision + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component("body_stats", &format!("Failed to save body stats: {}", e));
                        show.emit(FlashMessage::error(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let entries = match &*history {
        None => html! { <li class="loading">{"Loading body stats..."}</li> },
        Some(Err(message)) => html! { <li class="error">{format!("Error loading body stats: {}", message)}</li> },
        Some(Ok(entries)) if entries.is_empty() => html! { <li class="empty-state">{"No body stats recorded yet."}</li> },
        Some(Ok(entries)) => html! {
            {for entries.iter().filter(|entry| entry.has_measurements()).map(|entry| html! {
                <li>
                    <strong>{format_display_date(&entry.date)}</strong>
                    {": "}
                    {describe_body_stat(entry)}
                </li>
            })}
        },
    };

    html! {
        <section class="body-stats-section">
            <h2>{"Body Stats"}</h2>
            <FlashBanner message={flash.message.clone()} />
            <form class="body-stats-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="bodyWeight">{"Weight (kg)"}</label>
                    <input type="number" id="bodyWeight" step="0.1" value={(*weight).clone()}
                        onchange={bind(&weight)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="bodyFat">{"Body fat (%)"}</label>
                    <input type="number" id="bodyFat" step="0.1" value={(*body_fat).clone()}
                        onchange={bind(&body_fat)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="muscleMass">{"Muscle mass (kg)"}</label>
                    <input type="number" id="muscleMass" step="0.1" value={(*muscle).clone()}
                        onchange={bind(&muscle)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="waist">{"Waist (cm)"}</label>
                    <input type="number" id="waist" step="0.1" value={(*waist).clone()}
                        onchange={bind(&waist)} disabled={*submitting} />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Saving..." } else { "Save Stats" }}
                </button>
            </form>
            <h3>{"History"}</h3>
            <ul id="bodyStatsHistory" class="body-stats-history">
                {entries}
            </ul>
        </section>
    }
}
