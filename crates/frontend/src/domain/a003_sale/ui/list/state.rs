use contracts::domain::a003_sale::aggregate::SaleQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct SalesListState {
    pub query: SaleQuery,
    /// Sale open in the edit dialog
    pub editing_id: Option<String>,
}

pub fn create_state() -> RwSignal<SalesListState> {
    RwSignal::new(SalesListState::default())
}
