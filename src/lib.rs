//! Size-classed pooled buffer allocation for message payloads
//!
//! This crate provides reference-counted byte buffers for workloads that
//! allocate and release variable-sized payloads at high frequency, where
//! both repeated system allocation and cross-owner copies cost real
//! throughput:
//!
//! - Size-classed free-list pooling with LIFO block reuse
//! - Shared-ownership [`Buffer`] handles (clone shares, last drop releases)
//! - A non-pooled fallback allocator with identical semantics
//! - Strategy selection from configuration, per instance or process-wide
//!
//! # Example
//!
//! ```
//! use bufpool::{Allocator, AllocatorConfig, BufferAllocator};
//!
//! let allocator = Allocator::new(&AllocatorConfig::default());
//!
//! // A 10-byte request is served from the 32-byte size class.
//! let mut buf = allocator.allocate(10);
//! assert_eq!(buf.capacity(), 32);
//! buf.copy_from_slice(b"payload-10");
//!
//! let shared = buf.clone(); // second owner, no copy
//! drop(buf);                // block stays in circulation
//! drop(shared);             // block returns to its pool for reuse
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod allocator;
pub mod config;
pub mod error;
pub mod utils;

mod raw;

pub use allocator::{
    Allocator, Buffer, BufferAllocator, PooledAllocator, SIZE_CLASS, SimpleAllocator, size_class,
};
pub use config::{AllocatorConfig, Strategy};
pub use error::{ConfigError, ConfigResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
