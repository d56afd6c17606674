pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod optics;
pub mod output;
pub mod pipeline;
pub mod ui;

// Re-export modules for shorter paths
pub use optics::calc;
pub use optics::cameras;
pub use optics::coc;
pub use optics::units;
