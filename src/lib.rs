pub mod config;
pub mod http_client;
pub mod report;
pub mod shell;
