pub mod backup_service;
pub mod cli;
pub mod collections;
pub mod config;
pub mod data_layer_error;
pub mod device;
pub mod export_service;
pub mod naming;
pub mod time_provider;
