//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_customer--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Indicators and summary cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page (collect bottles, contract viewer).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Session and user administration.
pub const PAGE_CAT_SYSTEM: &str = "system";
