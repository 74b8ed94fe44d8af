//! Cart interaction controller for a storefront page.
//!
//! [`CartController::install`] binds the page's cart elements once and then
//! reacts to submit and click events: async add-to-cart, badge updates,
//! toast notifications, the mini cart preview and the cart dropdown.

use std::sync::{Arc, Mutex, PoisonError};

use page::Document;

pub mod badge;
pub mod config;
pub mod controller;
pub mod dropdown;
pub mod mini_cart;
pub mod notification;
pub mod registry;
pub mod scheduler;

pub use config::UiSettings;
pub use controller::{
    events::{EventOutcome, PageEvent, SubmitResult},
    CartController,
};
pub use dropdown::{DropdownBinding, DropdownState};
pub use registry::{ElementRegistry, FormBinding};
pub use scheduler::ScheduledTask;

pub type SharedDocument = Arc<Mutex<Document>>;

pub fn shared_document(document: Document) -> SharedDocument {
    Arc::new(Mutex::new(document))
}

/// Runs `f` with the document locked. A poisoned lock is recovered; the tree
/// has no invariants a panicking handler could have left half-applied.
pub fn with_document<R>(document: &SharedDocument, f: impl FnOnce(&mut Document) -> R) -> R {
    let mut guard = document.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}
