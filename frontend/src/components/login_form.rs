use shared::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::flash_message::FlashBanner;
use crate::hooks::{use_flash, use_session, FlashMessage};
use crate::pages::Page;
use crate::services::form_utils::require_text;
use crate::services::{ApiClient, Logger};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub api_client: ApiClient,
    pub flash_timeout_ms: u32,
    pub on_navigate: Callback<Page>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let session = use_session();
    let flash = use_flash(props.flash_timeout_ms);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let username = username.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let show = flash.show.clone();
        let login = session.as_ref().map(|s| s.login.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match (require_text(&username, "Username"), require_text(&password, "Password")) {
                (Ok(username), Ok(password)) => LoginRequest { username, password },
                (Err(message), _) | (_, Err(message)) => {
                    show.emit(FlashMessage::error(message));
                    return;
                }
            };

            let api_client = api_client.clone();
            let submitting = submitting.clone();
            let show = show.clone();
            let login = login.clone();
            submitting.set(true);
            spawn_local(async move {
                match api_client.login(&request).await {
                    Ok(response) => {
                        Logger::info_with_component("login_form", &format!("User {} signed in", response.user_id));
                        show.emit(FlashMessage::success("Login successful! Redirecting..."));
                        if let Some(login) = login {
                            login.emit(response.user_id);
                        }
                    }
                    Err(e) => {
                        Logger::warn_with_component("login_form", &format!("Login failed: {}", e));
                        show.emit(FlashMessage::error(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_to_register = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Register))
    };

    html! {
        <section class="auth-section">
            <h2>{"Login"}</h2>
            <FlashBanner message={flash.message.clone()} />
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="loginUsername">{"Username"}</label>
                    <input
                        type="text"
                        id="loginUsername"
                        value={(*username).clone()}
                        onchange={on_username_change}
                        disabled={*submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="loginPassword">{"Password"}</label>
                    <input
                        type="password"
                        id="loginPassword"
                        value={(*password).clone()}
                        onchange={on_password_change}
                        disabled={*submitting}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">
                {"No account yet? "}
                <button class="btn-link" onclick={go_to_register}>{"Register"}</button>
            </p>
        </section>
    }
}
