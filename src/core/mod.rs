pub mod backup;
pub mod calculator;
pub mod job;
pub mod log;
pub mod logic;
pub mod report;
