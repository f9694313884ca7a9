pub mod card;
pub mod config;
pub mod course;
pub mod output;
pub mod scoring;
