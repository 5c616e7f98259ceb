use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// Short-lived success/error banner text
#[derive(Debug, Clone, PartialEq)]
pub struct FlashMessage {
    pub text: String,
    pub kind: FlashKind,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "message success",
            FlashKind::Error => "message error",
        }
    }
}

pub struct UseFlashResult {
    pub message: Option<FlashMessage>,
    pub show: Callback<FlashMessage>,
}

/// Banner state that clears itself `timeout_ms` after the latest message
#[hook]
pub fn use_flash(timeout_ms: u32) -> UseFlashResult {
    let message = use_state(|| None::<FlashMessage>);
    // Bumped per message so an older timer cannot hide a newer banner
    let shown = use_mut_ref(|| 0u64);

    let show = {
        let message = message.clone();
        let shown = shown.clone();

        use_callback(timeout_ms, move |flash: FlashMessage, timeout_ms| {
            let generation = {
                let mut counter = shown.borrow_mut();
                *counter += 1;
                *counter
            };
            message.set(Some(flash));

            let message = message.clone();
            let shown = shown.clone();
            let timeout_ms = *timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                if *shown.borrow() == generation {
                    message.set(None);
                }
            });
        })
    };

    UseFlashResult {
        message: (*message).clone(),
        show,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_css_class() {
        assert_eq!(FlashMessage::success("Saved").css_class(), "message success");
        assert_eq!(FlashMessage::error("Nope").css_class(), "message error");
        assert_eq!(FlashMessage::error("Nope").kind, FlashKind::Error);
    }
}
