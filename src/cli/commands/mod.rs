pub mod add;
pub mod config;
pub mod edit;
pub mod import;
pub mod init;
pub mod migrate;
pub mod rides;
pub mod stats;
pub mod view;
