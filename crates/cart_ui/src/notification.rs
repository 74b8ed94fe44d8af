//! Toast notifications pinned to the top-right corner of the page.

use page::{Document, ElementBuilder, NodeId};
use shared::domain::NotificationKind;

use crate::{scheduler::ScheduledTask, with_document, SharedDocument, UiSettings};

pub const NOTIFICATION_CLASS: &str = "cart-notification";
const DISMISS_ATTR: &str = "data-dismiss";
const CLOSE_ICON_PATH: &str = "M6 18L18 6M6 6l12 12";

/// A notification on the page together with its auto-removal timer.
#[derive(Debug)]
pub struct Notification {
    pub element: NodeId,
    pub close_button: NodeId,
    pub auto_remove: ScheduledTask,
}

fn kind_classes(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "bg-green-500 text-white",
        NotificationKind::Error => "bg-red-500 text-white",
    }
}

fn kind_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    }
}

pub fn show_notification(
    document: &SharedDocument,
    settings: &UiSettings,
    message: &str,
    kind: NotificationKind,
) -> Notification {
    let (element, close_button) = with_document(document, |doc| {
        let close = ElementBuilder::new("button")
            .attr("type", "button")
            .attr(DISMISS_ATTR, "notification")
            .attr("aria-label", "Dismiss")
            .class("ml-4 text-white hover:text-gray-200")
            .child(
                ElementBuilder::new("svg")
                    .class("w-4 h-4")
                    .attr("fill", "none")
                    .attr("stroke", "currentColor")
                    .attr("viewBox", "0 0 24 24")
                    .child(
                        ElementBuilder::new("path")
                            .attr("stroke-linecap", "round")
                            .attr("stroke-linejoin", "round")
                            .attr("stroke-width", "2")
                            .attr("d", CLOSE_ICON_PATH),
                    ),
            );
        let element = doc.append_built(
            doc.body(),
            ElementBuilder::new("div")
                .class(NOTIFICATION_CLASS)
                .class("fixed top-4 right-4 p-4 rounded-lg shadow-lg z-50")
                .class(kind_classes(kind))
                .attr("role", "alert")
                .attr("data-kind", kind_name(kind))
                .child(
                    ElementBuilder::new("div")
                        .class("flex items-center")
                        .child(ElementBuilder::new("span").text(message))
                        .child(close),
                ),
        );
        let close_button = doc
            .query_descendant(element, "button", Some((DISMISS_ATTR, "notification")))
            .unwrap_or(element);
        (element, close_button)
    });
    tracing::debug!(kind = kind_name(kind), text = message, "showing notification");

    let timer_document = document.clone();
    let auto_remove = ScheduledTask::after(settings.notification_timeout, move || {
        with_document(&timer_document, |doc| doc.discard(element));
    });

    Notification {
        element,
        close_button,
        auto_remove,
    }
}

/// Removes the notification whose dismiss control contains `target`.
/// Returns false when the click was not on a dismiss control.
pub fn dismiss_from_click(doc: &mut Document, target: NodeId) -> bool {
    let mut cursor = Some(target);
    let mut dismiss = None;
    while let Some(current) = cursor {
        if doc.attribute(current, DISMISS_ATTR) == Some("notification") {
            dismiss = Some(current);
        }
        if doc.has_class(current, NOTIFICATION_CLASS) {
            return match dismiss {
                Some(_) => doc.discard(current),
                None => false,
            };
        }
        cursor = doc.parent(current);
    }
    false
}

/// Text and kind of every notification currently on the page, oldest first.
pub fn visible_notifications(doc: &Document) -> Vec<(NotificationKind, String)> {
    doc.get_elements_by_class_name(NOTIFICATION_CLASS)
        .into_iter()
        .map(|node| {
            let kind = match doc.attribute(node, "data-kind") {
                Some("success") => NotificationKind::Success,
                _ => NotificationKind::Error,
            };
            (kind, doc.text_content(node))
        })
        .collect()
}
