pub mod admin;
pub mod catalog;
pub mod draft;
pub mod ports;
