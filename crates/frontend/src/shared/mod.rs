pub mod api_utils;
pub mod cart;
pub mod date_utils;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod theme;
pub mod toast;
pub mod upload;
