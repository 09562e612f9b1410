pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod factors;
pub mod launch;
pub mod output;
pub mod population;
pub mod prompt;
pub mod scoring;
pub mod session;
