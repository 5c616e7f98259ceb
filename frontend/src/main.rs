use shared::UserId;
use yew::prelude::*;

mod chart;
mod components;
mod hooks;
mod pages;
mod services;

use components::{
    BodyStats, DashboardSummaryView, Goals, Header, LoginForm, ProgressChart, RegisterForm, WorkoutHistoryTable,
    WorkoutLogForm,
};
use pages::{resolve_page, Page};
use services::{ApiClient, AppConfig, Logger, Session, SessionHandle};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let api_client = use_memo(config.clone(), |config| ApiClient::from_config(config));
    let session = use_state(Session::restore);
    let requested = use_state(|| Page::Dashboard);

    let login = {
        let session = session.clone();
        let requested = requested.clone();
        Callback::from(move |user_id: UserId| {
            let signed_in = Session::for_user(user_id);
            signed_in.persist();
            session.set(signed_in);
            requested.set(Page::Dashboard);
            Logger::info_with_component("app", &format!("Session started for user {}", user_id));
        })
    };

    let logout = {
        let session = session.clone();
        let requested = requested.clone();
        Callback::from(move |_: ()| {
            let anonymous = Session::anonymous();
            anonymous.persist();
            session.set(anonymous);
            requested.set(Page::Login);
            Logger::info_with_component("app", "Session cleared");
        })
    };

    let on_navigate = {
        let requested = requested.clone();
        Callback::from(move |page: Page| requested.set(page))
    };

    let handle = SessionHandle {
        session: *session,
        login,
        logout,
    };
    let page = resolve_page(*requested, &session);
    let client = (*api_client).clone();
    let flash_timeout_ms = config.flash_timeout_ms;

    let content = match page {
        Page::Login => html! {
            <LoginForm api_client={client} {flash_timeout_ms} on_navigate={on_navigate.clone()} />
        },
        Page::Register => html! {
            <RegisterForm api_client={client} {flash_timeout_ms} on_navigate={on_navigate.clone()} />
        },
        Page::Dashboard => html! { <DashboardSummaryView api_client={client} /> },
        Page::WorkoutLog => html! { <WorkoutLogForm api_client={client} {flash_timeout_ms} /> },
        Page::History => html! { <WorkoutHistoryTable api_client={client} /> },
        Page::Progress => html! { <ProgressChart api_client={client} canvas_size={config.chart_canvas} /> },
        Page::BodyStats => html! { <BodyStats api_client={client} {flash_timeout_ms} /> },
        Page::Goals => html! { <Goals api_client={client} {flash_timeout_ms} /> },
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            <Header current={page} on_navigate={on_navigate} />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
        </ContextProvider<SessionHandle>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
