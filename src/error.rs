//! Error types for allocator configuration
//!
//! Configuration validation is the only recoverable error surface in this
//! crate. Allocation failure itself is fatal: the raw layer aborts the
//! process via [`std::alloc::handle_alloc_error`], and misuse of payload
//! pointers is undefined behavior with no runtime detection.

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Alignment is not a power of two
    #[error("alignment {0} is not a power of two")]
    AlignmentNotPowerOfTwo(usize),

    /// Alignment is too small to hold a block header slot
    #[error("alignment {value} is below the {min}-byte minimum")]
    AlignmentTooSmall {
        /// The rejected alignment value
        value: usize,
        /// The smallest accepted alignment
        min: usize,
    },

    /// The process-wide allocator was already installed
    #[error("allocator already initialized")]
    AlreadyInitialized,
}
