use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;

use crate::domain::a001_customer::api::CUSTOMERS_PER_PAGE;

#[derive(Clone, Debug)]
pub struct CustomersListState {
    pub page: PageRequest,
}

impl Default for CustomersListState {
    fn default() -> Self {
        Self {
            page: PageRequest::first(CUSTOMERS_PER_PAGE),
        }
    }
}

pub fn create_state() -> RwSignal<CustomersListState> {
    RwSignal::new(CustomersListState::default())
}
