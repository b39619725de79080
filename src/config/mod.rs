pub mod chart_file;
#[cfg(feature = "cli")]
pub mod cli;

pub use chart_file::ChartFile;
#[cfg(feature = "cli")]
pub use cli::CliConfig;
