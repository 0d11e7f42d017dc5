pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod state;

pub(crate) type IoResult<T> = std::io::Result<T>;
pub type ClinicaError = Box<dyn std::error::Error>;
pub type ClinicaResult<T> = Result<T, ClinicaError>;
