//! Allocator configuration
//!
//! Two read-only settings drive the crate: the alignment used for every raw
//! allocation and the strategy that decides between the pooled and the
//! simple allocator. Both are consumed once, when an
//! [`Allocator`](crate::Allocator) instance is constructed.

use crate::error::{ConfigError, ConfigResult};

/// Default alignment for raw allocations, in bytes.
pub const DEFAULT_ALIGNMENT: usize = 16;

/// Smallest accepted alignment: a block header must start on a
/// pointer-aligned boundary.
pub const MIN_ALIGNMENT: usize = core::mem::align_of::<usize>();

/// Allocation strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Size-classed pooling with free-list reuse
    #[default]
    Smart,
    /// Raw aligned allocation on every call, no reuse
    Simple,
}

impl Strategy {
    /// Resolves a strategy from its configuration name.
    ///
    /// `"smart"` selects pooling; any other value selects the simple
    /// allocator.
    pub fn from_name(name: &str) -> Self {
        if name == "smart" { Strategy::Smart } else { Strategy::Simple }
    }
}

impl From<&str> for Strategy {
    fn from(name: &str) -> Self {
        Strategy::from_name(name)
    }
}

/// Allocator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    /// Alignment for every raw allocation, payload and header included
    pub alignment: usize,

    /// Which allocator the selector hands out
    pub strategy: Strategy,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self { alignment: DEFAULT_ALIGNMENT, strategy: Strategy::default() }
    }
}

impl AllocatorConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.alignment.is_power_of_two() {
            return Err(ConfigError::AlignmentNotPowerOfTwo(self.alignment));
        }
        if self.alignment < MIN_ALIGNMENT {
            return Err(ConfigError::AlignmentTooSmall {
                value: self.alignment,
                min: MIN_ALIGNMENT,
            });
        }
        Ok(())
    }

    /// Create a builder for configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for allocator configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AllocatorConfig,
}

impl ConfigBuilder {
    /// Create new builder with defaults
    pub fn new() -> Self {
        Self { config: AllocatorConfig::default() }
    }

    /// Set the raw-allocation alignment
    pub fn alignment(mut self, alignment: usize) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Set the allocation strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConfigResult<AllocatorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
