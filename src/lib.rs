pub mod catalog;
pub mod draft;
pub mod error;
pub mod gate;
pub mod link;
pub mod message;
pub mod rules;
pub mod service;
pub mod utils;
