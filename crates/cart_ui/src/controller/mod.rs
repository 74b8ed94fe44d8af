//! Controller layer: binds the page once, then routes submit and click events.

pub mod events;

use std::sync::Arc;

use cart_client::{AddToCartOutcome, CartTransport};
use page::NodeId;
use shared::domain::{CartSummary, NotificationKind};
use tracing::{info, warn};

use crate::{
    badge::update_cart_badges,
    mini_cart,
    notification::{self, Notification},
    registry::ElementRegistry,
    scheduler::ScheduledTask,
    with_document, SharedDocument, UiSettings,
};
use events::{EventOutcome, PageEvent, SubmitResult};

pub struct CartController {
    document: SharedDocument,
    registry: ElementRegistry,
    transport: Arc<dyn CartTransport>,
    settings: UiSettings,
}

/// Restores the submit control when a submission ends, whichever way it ends.
struct SubmitButtonGuard {
    document: SharedDocument,
    button: NodeId,
    original_label: String,
}

impl Drop for SubmitButtonGuard {
    fn drop(&mut self) {
        let label = std::mem::take(&mut self.original_label);
        with_document(&self.document, |doc| {
            doc.set_disabled(self.button, false);
            doc.set_text(self.button, label);
        });
    }
}

impl CartController {
    /// Binds the cart elements present on the page. Call once the document is ready.
    pub fn install(
        document: SharedDocument,
        transport: Arc<dyn CartTransport>,
        settings: UiSettings,
    ) -> Self {
        let registry = with_document(&document, |doc| ElementRegistry::bind(doc));
        info!(
            submit_handler = registry.add_to_cart.is_some(),
            dropdown_handler = registry.dropdown.is_some(),
            "cart controller installed"
        );
        Self {
            document,
            registry,
            transport,
            settings,
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    pub async fn dispatch(&self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Submit { target } => {
                let handled = self
                    .registry
                    .add_to_cart
                    .is_some_and(|binding| binding.form == target);
                if handled {
                    self.submit_add_to_cart().await;
                }
                EventOutcome {
                    default_prevented: handled,
                }
            }
            PageEvent::Click { target } => self.click(target),
        }
    }

    /// Posts the add-to-cart form and reflects the reply on the page.
    pub async fn submit_add_to_cart(&self) -> SubmitResult {
        let Some(binding) = self.registry.add_to_cart else {
            return SubmitResult::NotRegistered;
        };

        let prepared = with_document(&self.document, |doc| {
            if doc.is_disabled(binding.submit_button) {
                return None;
            }
            let action = doc
                .attribute(binding.form, "action")
                .unwrap_or_default()
                .to_string();
            let fields = doc.form_data(binding.form);
            let original_label = doc.text_content(binding.submit_button);
            doc.set_disabled(binding.submit_button, true);
            doc.set_text(binding.submit_button, self.settings.submitting_label.as_str());
            Some((action, fields, original_label))
        });
        let Some((action, fields, original_label)) = prepared else {
            warn!("add-to-cart submit ignored while a request is in flight");
            return SubmitResult::AlreadyInFlight;
        };

        let _restore = SubmitButtonGuard {
            document: self.document.clone(),
            button: binding.submit_button,
            original_label,
        };

        let outcome =
            AddToCartOutcome::from_result(self.transport.post_form(&action, &fields).await);
        self.apply_outcome(&outcome);
        SubmitResult::Completed(outcome)
    }

    fn apply_outcome(&self, outcome: &AddToCartOutcome) {
        match outcome {
            AddToCartOutcome::Added { message, summary } => {
                info!(
                    items = summary.items_count,
                    total = summary.total,
                    "item added to cart"
                );
                with_document(&self.document, |doc| {
                    update_cart_badges(doc, &self.registry.cart_badges, summary.items_count)
                });
                let message = message
                    .as_deref()
                    .unwrap_or(&self.settings.added_fallback_message);
                self.show_notification(message, NotificationKind::Success);
                self.show_mini_cart(summary);
            }
            AddToCartOutcome::Rejected { error } => {
                warn!(error = error.as_deref(), "add-to-cart rejected");
                let message = error
                    .as_deref()
                    .unwrap_or(&self.settings.generic_error_message);
                self.show_notification(message, NotificationKind::Error);
            }
            AddToCartOutcome::Failed(err) => {
                warn!(error = %err, "add-to-cart request failed");
                self.show_notification(
                    &self.settings.generic_error_message,
                    NotificationKind::Error,
                );
            }
        }
    }

    pub fn show_notification(&self, message: &str, kind: NotificationKind) -> Notification {
        notification::show_notification(&self.document, &self.settings, message, kind)
    }

    pub fn show_mini_cart(&self, summary: &CartSummary) -> Option<ScheduledTask> {
        mini_cart::show_mini_cart(
            &self.document,
            self.registry.mini_cart,
            &self.settings,
            summary,
        )
    }

    /// A click at `target`: element handlers first, then the document-wide listener.
    pub fn click(&self, target: NodeId) -> EventOutcome {
        with_document(&self.document, |doc| {
            notification::dismiss_from_click(doc, target);

            let Some(dropdown) = self.registry.dropdown else {
                return EventOutcome::default();
            };
            let on_toggle = doc.contains(dropdown.toggle, target);
            if on_toggle {
                dropdown.toggle(doc, &self.settings);
            }
            dropdown.close_if_outside(doc, target);
            EventOutcome {
                default_prevented: on_toggle,
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
