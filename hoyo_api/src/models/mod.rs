pub mod api_account;
pub mod api_cdkey;
pub mod common;
