//! Build Implementations
//!
//! Concrete implementation of the ServiceBuilder port.

mod shell;

pub use shell::ShellBuilder;
