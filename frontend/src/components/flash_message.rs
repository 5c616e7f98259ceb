use yew::prelude::*;

use crate::hooks::FlashMessage;

#[derive(Properties, PartialEq)]
pub struct FlashBannerProps {
    pub message: Option<FlashMessage>,
}

#[function_component(FlashBanner)]
pub fn flash_banner(props: &FlashBannerProps) -> Html {
    match &props.message {
        Some(flash) => html! { <div class={flash.css_class()}>{&flash.text}</div> },
        None => html! {},
    }
}
