pub mod app;
pub mod logging;
pub mod profile_loader;
pub mod report;
