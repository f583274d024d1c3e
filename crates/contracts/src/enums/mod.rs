pub mod payment_method;
pub mod product_status;
pub mod product_type;
pub mod role;
pub mod transaction_category;
pub mod transaction_type;

pub use payment_method::PaymentMethod;
pub use product_status::ProductStatus;
pub use product_type::ProductType;
pub use role::Role;
pub use transaction_category::TransactionCategory;
pub use transaction_type::TransactionType;
