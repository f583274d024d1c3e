pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod list_resource;
pub mod modal;
pub mod money;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
