pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod job;
pub mod list;
pub mod log;
pub mod report;
pub mod summary;
