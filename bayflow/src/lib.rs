pub mod commands;
pub mod completions;
pub mod fs;
pub mod logging;
pub mod models;
pub mod validation;
pub mod workshop;

