pub mod clients;
pub mod consts;
pub mod models;
