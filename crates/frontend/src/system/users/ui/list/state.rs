use leptos::prelude::*;

/// Search and name ordering of the users table
#[derive(Clone, Debug)]
pub struct UsersListState {
    pub search_query: String,
    /// A to Z when true
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState {
        search_query: String::new(),
        sort_ascending: true,
        is_loaded: false,
    })
}
