use yew::prelude::*;

use crate::services::SessionHandle;

/// Session context provided by the app root.
#[hook]
pub fn use_session() -> Option<SessionHandle> {
    use_context::<SessionHandle>()
}
