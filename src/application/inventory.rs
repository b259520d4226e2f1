//! Inventory Use Case
//!
//! Orchestrates one inventory pass:
//! 1. Check the reference out
//! 2. Locate service directories
//! 3. Build and fingerprint each service
//! 4. Return the services sorted by name
//!
//! Passes are strictly sequential. The first build or fingerprint failure
//! aborts the pass and no partial inventory is returned.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{sort_by_name, Service};
use crate::domain::ports::{
    Fingerprinter, InventoryEvent, InventoryEventSink, NoopEventSink, Repository, ServiceBuilder,
    ServiceLocator,
};
use crate::domain::value_objects::ServicePattern;
use crate::error::MonoMetaResult;

/// Options for inventory passes
#[derive(Debug, Clone)]
pub struct InventoryOptions {
    /// Pattern matching the service directories
    pub pattern: ServicePattern,
    /// Service names that are located but never built
    pub exclude: Vec<String>,
}

impl InventoryOptions {
    pub fn new(pattern: ServicePattern) -> Self {
        Self {
            pattern,
            exclude: Vec::new(),
        }
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }
}

/// Inventory use case - builds every service of a reference
///
/// Owns the repository: a checkout mutates the shared working tree that the
/// following builds read, so only one pass may run at a time.
pub struct InventoryUseCase<R, L, B, F>
where
    R: Repository,
    L: ServiceLocator,
    B: ServiceBuilder,
    F: Fingerprinter,
{
    repository: R,
    locator: L,
    builder: B,
    fingerprinter: F,
    options: InventoryOptions,
    events: Arc<dyn InventoryEventSink>,
}

impl<R, L, B, F> InventoryUseCase<R, L, B, F>
where
    R: Repository,
    L: ServiceLocator,
    B: ServiceBuilder,
    F: Fingerprinter,
{
    pub fn new(
        repository: R,
        locator: L,
        builder: B,
        fingerprinter: F,
        options: InventoryOptions,
    ) -> Self {
        Self {
            repository,
            locator,
            builder,
            fingerprinter,
            options,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn InventoryEventSink>) -> Self {
        self.events = events;
        self
    }

    pub(crate) fn events(&self) -> Arc<dyn InventoryEventSink> {
        self.events.clone()
    }

    /// Get the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Inventory the services of `reference`
    ///
    /// Errors are wrapped with the reference being inventoried.
    pub fn inventory(&mut self, reference: &str) -> MonoMetaResult<Vec<Service>> {
        self.run_pass(reference).map_err(|e| e.in_inventory(reference))
    }

    /// Release the repository
    pub fn close(&mut self) -> MonoMetaResult<()> {
        self.repository.close()
    }

    fn run_pass(&mut self, reference: &str) -> MonoMetaResult<Vec<Service>> {
        self.remove_stale_artifacts()?;

        let resolved = self.repository.checkout(reference)?;
        self.events.on_event(InventoryEvent::CheckedOut {
            requested: reference.to_string(),
            resolved: resolved.clone(),
        });

        let root = self.repository.root_path().to_path_buf();
        let pattern = &self.options.pattern;
        let dirs = self.locator.locate(&root, pattern)?;
        self.events.on_event(InventoryEvent::ServicesLocated {
            reference: resolved.clone(),
            count: dirs.len(),
        });

        let mut services = Vec::with_capacity(dirs.len());
        for dir in dirs {
            let name = pattern.name_of(&root, &dir);

            if self.options.is_excluded(&name) {
                self.events.on_event(InventoryEvent::ServiceExcluded {
                    name,
                    directory: dir,
                });
                continue;
            }

            self.events.on_event(InventoryEvent::BuildStarted {
                name: name.clone(),
                directory: dir.clone(),
            });

            let artifact = self.builder.build(&dir)?;
            let checksum = self.fingerprinter.fingerprint(&artifact)?;

            self.events.on_event(InventoryEvent::ServiceBuilt {
                name: name.clone(),
                artifact: artifact.clone(),
                checksum: checksum.to_string(),
            });

            services.push(Service::new(name, artifact, checksum, resolved.clone()));
        }

        sort_by_name(&mut services);

        self.events.on_event(InventoryEvent::InventoryCompleted {
            reference: resolved,
            count: services.len(),
        });

        Ok(services)
    }

    /// Delete the artifacts sitting in the current tree's service directories
    ///
    /// They may come from an earlier pass or an earlier run. Left untracked,
    /// they would keep deleted service directories alive across the checkout.
    fn remove_stale_artifacts(&mut self) -> MonoMetaResult<()> {
        let root = self.repository.root_path().to_path_buf();
        let stale: Vec<PathBuf> = self
            .locator
            .locate(&root, &self.options.pattern)?
            .iter()
            .map(|dir| self.builder.artifact_path(dir))
            .collect();
        self.repository.remove_untracked(&stale)
    }
}
