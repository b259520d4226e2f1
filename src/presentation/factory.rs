//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{DiffUseCase, InventoryOptions, InventoryUseCase};
use crate::config::Settings;
use crate::domain::ports::{InventoryEventSink, Repository};
use crate::error::MonoMetaResult;
use crate::infrastructure::{open_repository, GlobLocator, Sha256Fingerprinter, ShellBuilder};

/// Type alias for the concrete InventoryUseCase with all dependencies
pub type ConcreteInventoryUseCase =
    InventoryUseCase<Box<dyn Repository>, GlobLocator, ShellBuilder, Sha256Fingerprinter>;

/// Type alias for the concrete DiffUseCase with all dependencies
pub type ConcreteDiffUseCase =
    DiffUseCase<Box<dyn Repository>, GlobLocator, ShellBuilder, Sha256Fingerprinter>;

/// Create an inventory use case for validated settings
///
/// Opens (or clones) the repository, so this already touches git.
pub fn create_inventory_use_case(
    settings: &Settings,
    events: Arc<dyn InventoryEventSink>,
) -> MonoMetaResult<ConcreteInventoryUseCase> {
    let repository = open_repository(&settings.source)?;
    let builder = ShellBuilder::new(settings.build_command.clone(), settings.binary_name.clone());
    let options =
        InventoryOptions::new(settings.pattern.clone()).with_exclude(settings.exclude.clone());

    Ok(InventoryUseCase::new(
        repository,
        GlobLocator::new(),
        builder,
        Sha256Fingerprinter::new(),
        options,
    )
    .with_events(events))
}

/// Create a diff use case for validated settings
pub fn create_diff_use_case(
    settings: &Settings,
    events: Arc<dyn InventoryEventSink>,
) -> MonoMetaResult<ConcreteDiffUseCase> {
    Ok(DiffUseCase::new(create_inventory_use_case(settings, events)?))
}
