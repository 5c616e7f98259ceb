use gloo::timers::future::TimeoutFuture;
use shared::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::flash_message::FlashBanner;
use crate::hooks::{use_flash, FlashMessage};
use crate::pages::Page;
use crate::services::form_utils::require_text;
use crate::services::{ApiClient, Logger};

/// Delay before switching to the login page after a successful registration
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub api_client: ApiClient,
    pub flash_timeout_ms: u32,
    pub on_navigate: Callback<Page>,
}

fn build_request(username: &str, email: &str, password: &str) -> Result<RegisterRequest, String> {
    Ok(RegisterRequest {
        username: require_text(username, "Username")?,
        email: require_text(email, "Email")?,
        password: require_text(password, "Password")?,
    })
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let flash = use_flash(props.flash_timeout_ms);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_navigate = props.on_navigate.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let show = flash.show.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match build_request(&username, &email, &password) {
                Ok(request) => request,
                Err(message) => {
                    show.emit(FlashMessage::error(message));
                    return;
                }
            };

            let api_client = api_client.clone();
            let on_navigate = on_navigate.clone();
            let submitting = submitting.clone();
            let show = show.clone();
            submitting.set(true);
            spawn_local(async move {
                match api_client.register(&request).await {
                    Ok(response) => {
                        Logger::info_with_component("register_form", &format!("Registered user {}", response.user_id));
                        show.emit(FlashMessage::success("Registration successful! Please login."));
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        on_navigate.emit(Page::Login);
                    }
                    Err(e) => {
                        Logger::warn_with_component("register_form", &format!("Registration failed: {}", e));
                        show.emit(FlashMessage::error(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_to_login = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Login))
    };

    html! {
        <section class="auth-section">
            <h2>{"Register"}</h2>
            <FlashBanner message={flash.message.clone()} />
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="regUsername">{"Username"}</label>
                    <input type="text" id="regUsername" value={(*username).clone()}
                        onchange={bind(&username)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="regEmail">{"Email"}</label>
                    <input type="email" id="regEmail" value={(*email).clone()}
                        onchange={bind(&email)} disabled={*submitting} />
                </div>
                <div class="form-group">
                    <label for="regPassword">{"Password"}</label>
                    <input type="password" id="regPassword" value={(*password).clone()}
                        onchange={bind(&password)} disabled={*submitting} />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-switch">
                {"Already registered? "}
                <button class="btn-link" onclick={go_to_login}>{"Login"}</button>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_trims_fields() {
        let request = build_request(" alice ", "alice@example.com", "secret").unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "alice@example.com");
    }

    #[test]
    fn test_build_request_reports_first_missing_field() {
        let err = build_request("alice", "  ", "").unwrap_err();
        assert!(err.contains("Email"));
    }
}
