pub mod config;
pub mod logging;

pub mod history;
pub mod scoring;
pub mod service;
pub mod url_model;
pub mod verdict;
