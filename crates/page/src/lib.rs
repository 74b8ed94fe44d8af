//! In-memory document tree the cart controller runs against.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. [`Document::remove`] only detaches a node, so it can be
//! re-attached later. [`Document::discard`] and replaced content free their
//! slots for reuse, and handles to freed nodes resolve to nothing.

mod builder;
mod dom;
mod form;
mod render;
mod storefront;

pub use builder::ElementBuilder;
pub use dom::{Document, NodeId};
pub use storefront::StorefrontPage;

#[cfg(test)]
#[path = "tests/dom_tests.rs"]
mod tests;
