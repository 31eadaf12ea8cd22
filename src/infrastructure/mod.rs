//! Infrastructure layer - File system, processes and output

pub mod config;
pub mod pipe;
pub mod process;
pub mod runtime;

pub use config::{ColorMode, Config, ConfigSource, Overrides};
pub use pipe::OutputPipe;
pub use process::{Captured, CommandLine, CommandRunner, SystemRunner};
pub use runtime::{FileSystemRuntime, HelpRuntime};
