use yew::prelude::*;

use crate::hooks::use_session;
use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_session();
    let signed_in = session.as_ref().map(|s| s.session.is_authenticated()).unwrap_or(false);

    let nav_button = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let class = if page == props.current { "nav-link active" } else { "nav-link" };
        html! {
            <button class={class} onclick={Callback::from(move |_| on_navigate.emit(page))}>
                {page.title()}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Fitness Tracker"}</h1>
                {if signed_in {
                    let logout = session.as_ref().map(|s| s.logout.clone());
                    html! {
                        <nav class="header-nav">
                            {for Page::NAVIGATION.into_iter().map(nav_button)}
                            <button class="btn btn-secondary logout-btn" onclick={Callback::from(move |_| {
                                if let Some(logout) = &logout {
                                    logout.emit(());
                                }
                            })}>
                                {"Logout"}
                            </button>
                        </nav>
                    }
                } else {
                    html! {
                        <nav class="header-nav">
                            {nav_button(Page::Login)}
                            {nav_button(Page::Register)}
                        </nav>
                    }
                }}
            </div>
        </header>
    }
}
