//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (JSON/text)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use mono_meta::presentation::factory;
//!
//! let settings = config.validate()?;
//! let mut diff = factory::create_diff_use_case(&settings, Arc::new(NoopEventSink))?;
//! let result = diff.execute("master", "feature")?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_diff_use_case, create_inventory_use_case};
pub use output::{create_renderer, OutputFormat, ResultRenderer};
