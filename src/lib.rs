// Library for tests to access modules

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod version;
