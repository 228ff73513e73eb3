//! Strategy selection and the process-wide allocator
//!
//! [`Allocator`] is an explicitly constructed instance meant to be passed
//! to the components that allocate (dependency injection). For callers that
//! want one shared process-wide instance instead, [`init`] installs it once
//! during process setup and [`get`] returns it; if setup never ran, the
//! first [`get`] installs a default-configured instance.

use std::sync::OnceLock;

use super::buffer::Buffer;
use super::pooled::PooledAllocator;
use super::simple::SimpleAllocator;
use super::traits::BufferAllocator;
use crate::config::{AllocatorConfig, Strategy};
use crate::error::{ConfigError, ConfigResult};

/// The strategy-selected allocator.
pub enum Allocator {
    /// Size-classed pooling (`Strategy::Smart`)
    Pooled(PooledAllocator),
    /// Raw allocation per call (`Strategy::Simple`)
    Simple(SimpleAllocator),
}

impl Allocator {
    /// Constructs the allocator the configuration selects.
    pub fn new(config: &AllocatorConfig) -> Self {
        match config.strategy {
            Strategy::Smart => Allocator::Pooled(PooledAllocator::new(config)),
            Strategy::Simple => Allocator::Simple(SimpleAllocator::new(config)),
        }
    }

    /// Which strategy this instance runs.
    pub fn strategy(&self) -> Strategy {
        match self {
            Allocator::Pooled(_) => Strategy::Smart,
            Allocator::Simple(_) => Strategy::Simple,
        }
    }
}

impl BufferAllocator for Allocator {
    fn allocate(&self, size: usize) -> Buffer {
        match self {
            Allocator::Pooled(pooled) => pooled.allocate(size),
            Allocator::Simple(simple) => simple.allocate(size),
        }
    }
}

static GLOBAL: OnceLock<Allocator> = OnceLock::new();

/// Installs the process-wide allocator. Call once during process setup,
/// before anything allocates through [`get`].
pub fn init(config: AllocatorConfig) -> ConfigResult<()> {
    config.validate()?;
    GLOBAL
        .set(Allocator::new(&config))
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Returns the process-wide allocator, installing a default-configured one
/// if [`init`] was never called.
///
/// The instance lives until process teardown; there is no shutdown hook.
pub fn get() -> &'static Allocator {
    GLOBAL.get_or_init(|| Allocator::new(&AllocatorConfig::default()))
}
