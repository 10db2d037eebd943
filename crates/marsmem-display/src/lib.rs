//! Pixel writes into a memory-mapped bitmap display.
//!
//! A [`Framebuffer`] translates `(x, y, color)` into one store at
//! `base + (x + y * width) * element_width`: row-major, origin top-left,
//! one element per pixel. The width is set by [`Framebuffer::configure`]
//! and defaults to 64.
//!
//! In checked mode coordinates outside the visible `width x height` area
//! are rejected. In unchecked mode they are translated anyway and the
//! store lands wherever the arithmetic points, possibly inside the heap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod error;
pub mod framebuffer;

pub use color::Color;
pub use config::DisplayConfig;
pub use error::DisplayError;
pub use framebuffer::Framebuffer;
