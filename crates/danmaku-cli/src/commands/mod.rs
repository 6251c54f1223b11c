pub mod config;
pub mod feed;
pub mod run;
pub mod samples;
