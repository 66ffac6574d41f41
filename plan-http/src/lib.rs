mod client;
mod factory;

pub use client::HttpAnalysisService;
pub use factory::HttpServiceFactory;
