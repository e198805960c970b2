pub mod audio;
pub mod capture;
pub mod cli;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod logging;
pub mod ui;
pub mod worker;
