//! Monotonic bump allocation over the simulated heap region.
//!
//! [`BumpArena`] owns a single cursor that starts at the heap base and only
//! ever moves forward. Each call to [`BumpArena::allocate`] returns the
//! cursor as it was before the call and advances it by the requested
//! number of elements, so successive ranges are disjoint and appear in
//! call order. Nothing is ever freed or reset.
//!
//! # Bounds modes
//!
//! - **Checked** (default): a request that would pass the end of the heap
//!   fails with [`ArenaError::Exhausted`] and leaves the cursor in place.
//! - **Unchecked**: capacity is ignored, matching the legacy hardware
//!   model. The cursor can run past the heap into whatever lies beyond;
//!   only leaving the 32-bit address space is reported.
//!
//! The arena hands out addresses only. It never touches memory itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod bump;
pub mod config;
pub mod error;

pub use allocation::Allocation;
pub use bump::BumpArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
