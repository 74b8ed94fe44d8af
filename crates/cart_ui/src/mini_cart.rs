use page::{ElementBuilder, NodeId};
use shared::domain::CartSummary;

use crate::{scheduler::ScheduledTask, with_document, SharedDocument, UiSettings};

const HIDDEN_CLASS: &str = "hidden";

/// Fills the preview container with the cart summary and reveals it until the
/// hide timer fires. Nothing happens when the page has no container.
pub fn show_mini_cart(
    document: &SharedDocument,
    container: Option<NodeId>,
    settings: &UiSettings,
    summary: &CartSummary,
) -> Option<ScheduledTask> {
    let container = container?;

    with_document(document, |doc| {
        let content = doc.build(
            ElementBuilder::new("div")
                .class("p-4 bg-white rounded-lg shadow-lg")
                .child(
                    ElementBuilder::new("p")
                        .class("font-semibold mb-2")
                        .text("Added to cart!"),
                )
                .child(
                    ElementBuilder::new("p")
                        .class("text-sm text-gray-600 mb-3")
                        .text(summary.line(&settings.currency_symbol)),
                )
                .child(
                    ElementBuilder::new("div")
                        .class("flex gap-2")
                        .child(
                            ElementBuilder::new("a")
                                .attr("href", &settings.cart_url)
                                .class("flex-1 text-center py-2 bg-gray-200 rounded hover:bg-gray-300")
                                .text("View Cart"),
                        )
                        .child(
                            ElementBuilder::new("a")
                                .attr("href", &settings.checkout_url)
                                .class("flex-1 text-center py-2 bg-blue-600 text-white rounded hover:bg-blue-700")
                                .text("Checkout"),
                        ),
                ),
        );
        doc.replace_children(container, [content]);
        doc.remove_class(container, HIDDEN_CLASS);
    });
    tracing::debug!(items = summary.items_count, total = summary.total, "showing mini cart");

    let timer_document = document.clone();
    Some(ScheduledTask::after(settings.mini_cart_timeout, move || {
        with_document(&timer_document, |doc| doc.add_class(container, HIDDEN_CLASS));
    }))
}
