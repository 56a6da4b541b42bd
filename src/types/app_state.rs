use std::sync::Arc;

use crate::services::autocomplete_session::AutocompleteSession;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<AutocompleteSession>,
}
