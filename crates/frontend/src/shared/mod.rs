pub mod api;
pub mod api_utils;
pub mod cache;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod filter;
pub mod forms;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notification;
pub mod page_frame;
pub mod page_standard;
