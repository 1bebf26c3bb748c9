pub mod api_utils;
pub mod clipboard;
pub mod download;
