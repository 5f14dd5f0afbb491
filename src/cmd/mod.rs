pub mod export;
pub mod goal;
pub mod init;
pub mod log;
pub mod plan;
pub mod today;
pub mod week;
