use contracts::domain::a003_sale::aggregate::{IndicatorsQuery, SalesIndicators};

use crate::shared::http::{self, ApiError};

pub async fn fetch_indicators(query: IndicatorsQuery) -> Result<SalesIndicators, ApiError> {
    http::get_with_query("/sales/indicators", &query.query_pairs()).await
}
