use page::{Document, NodeId};

/// Shows `count` on every badge; badges are hidden while the cart is empty.
pub fn update_cart_badges(doc: &mut Document, badges: &[NodeId], count: u64) {
    let display = if count > 0 { "block" } else { "none" };
    for badge in badges {
        doc.set_text(*badge, count.to_string());
        doc.set_display(*badge, display);
    }
    tracing::debug!(count, badges = badges.len(), "updated cart badges");
}
