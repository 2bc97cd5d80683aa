pub mod builtin;
#[cfg(feature = "cli")]
pub mod cli;
pub mod dataset_file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
