//! Domain Entities
//!
//! - `Service` - an artifact built at one reference
//! - `ServiceDiff` - a service reconciled across base and compare

mod service;
mod service_diff;

pub use service::{sort_by_name, Service};
pub use service_diff::{Comment, ServiceDiff};
