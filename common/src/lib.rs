pub mod command;
pub mod config;
pub mod intake;
pub mod listing;
pub mod notification;
pub mod registration;
pub mod report;
pub mod store;
pub mod submitter;
pub mod time;
