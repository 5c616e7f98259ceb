use plotters_canvas::CanvasBackend;
use web_sys::{HtmlCanvasElement, HtmlSelectElement};
use yew::prelude::*;

use crate::chart::{self, CanvasSize, ChartOutcome, ChartPlaceholder, PlottersSurface};
use crate::hooks::{use_progress, use_session, ExerciseOptions, ProgressView};
use crate::services::{ApiClient, Logger};

const COMPONENT: &str = "progress_chart";

#[derive(Properties, PartialEq)]
pub struct ProgressChartProps {
    pub api_client: ApiClient,
    pub canvas_size: CanvasSize,
}

#[function_component(ProgressChart)]
pub fn progress_chart(props: &ProgressChartProps) -> Html {
    let session = use_session();
    let user_id = session.as_ref().and_then(|s| s.user_id());
    let progress = use_progress(&props.api_client, user_id);
    let canvas_ref = use_node_ref();

    // Redraw after every view change; the canvas is mounted by then
    {
        let canvas_ref = canvas_ref.clone();
        let canvas_size = props.canvas_size;
        use_effect_with(progress.view.clone(), move |view| {
            draw_view(&canvas_ref, view, canvas_size);
            || ()
        });
    }

    let on_change = {
        let select = progress.select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlSelectElement = e.target_unchecked_into();
            select.emit(input.value());
        })
    };

    let selected = progress.view.selected_exercise().unwrap_or_default().to_string();

    let (options, hint) = match &progress.exercises {
        ExerciseOptions::Loading => (
            html! { <option value="">{"Loading exercises..."}</option> },
            Some("Loading exercise data...".to_string()),
        ),
        ExerciseOptions::Failed(message) => (
            html! { <option value="">{"No exercises available"}</option> },
            Some(format!("Error loading data: {}", message)),
        ),
        ExerciseOptions::Ready(names) if names.is_empty() => (
            html! { <option value="">{"No exercises available"}</option> },
            Some("No workouts logged yet. Log a workout first.".to_string()),
        ),
        ExerciseOptions::Ready(names) => (
            html! {
                <>
                    <option value="" selected={selected.is_empty()}>{"Choose an exercise..."}</option>
                    {for names.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == selected}>{name}</option>
                    })}
                </>
            },
            None,
        ),
    };

    let message = progress.view.status_text().or(hint);

    html! {
        <section class="progress-tracker">
            <h2>{"Progress"}</h2>
            <label for="exerciseSelect">{"Exercise"}</label>
            <select id="exerciseSelect" onchange={on_change}>
                {options}
            </select>
            <p id="progressMessage" class="progress-message">{message.unwrap_or_default()}</p>
            <canvas
                ref={canvas_ref}
                id="progressChart"
                class="progress-chart-canvas"
                width={(props.canvas_size.width as u32).to_string()}
                height={(props.canvas_size.height as u32).to_string()}
            ></canvas>
        </section>
    }
}

fn draw_view(canvas_ref: &NodeRef, view: &ProgressView, canvas_size: CanvasSize) {
    // Keep the previous drawing on screen while a fetch is in flight
    if matches!(view, ProgressView::Loading { .. }) {
        return;
    }

    let mut surface = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
        canvas.set_width(canvas_size.width as u32);
        canvas.set_height(canvas_size.height as u32);
        CanvasBackend::with_canvas_object(canvas).map(PlottersSurface::new)
    });

    let result = match view {
        ProgressView::Loaded { series, .. } => chart::render(surface.as_mut(), series, canvas_size),
        _ => {
            let placeholder = ChartPlaceholder::NoSelection;
            chart::render_placeholder(surface.as_mut(), canvas_size, placeholder.message())
                .map(|_| ChartOutcome::Placeholder(placeholder))
        }
    };

    match result {
        Ok(ChartOutcome::Drawn { points }) => Logger::info_with_component(
            COMPONENT,
            &format!(
                "Chart drawn for {} with {} points",
                view.selected_exercise().unwrap_or_default(),
                points
            ),
        ),
        Ok(ChartOutcome::Placeholder(placeholder)) => {
            Logger::debug_with_component(COMPONENT, &format!("Placeholder shown: {}", placeholder.message()))
        }
        Err(e) => Logger::error_with_component(COMPONENT, &format!("Could not draw progress chart: {}", e)),
    }
}
