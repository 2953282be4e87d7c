use std::sync::Arc;

use crate::domain::ports::outbound::UserSearchPort;

#[derive(Clone)]
pub struct AppState {
    user_search: Arc<dyn UserSearchPort>,
}

impl AppState {
    pub fn new(user_search: Arc<dyn UserSearchPort>) -> Self {
        Self { user_search }
    }

    pub fn user_search(&self) -> &dyn UserSearchPort {
        self.user_search.as_ref()
    }
}
