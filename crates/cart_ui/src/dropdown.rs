use page::{Document, ElementBuilder, NodeId};

use crate::UiSettings;

const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownBinding {
    pub toggle: NodeId,
    pub panel: NodeId,
}

impl DropdownBinding {
    pub fn state(&self, doc: &Document) -> DropdownState {
        if doc.has_class(self.panel, HIDDEN_CLASS) {
            DropdownState::Closed
        } else {
            DropdownState::Open
        }
    }

    /// Click on the toggle control: flips the panel, loading the preview when it opens.
    pub fn toggle(&self, doc: &mut Document, settings: &UiSettings) -> DropdownState {
        let state = if doc.toggle_class(self.panel, HIDDEN_CLASS) {
            DropdownState::Closed
        } else {
            self.load_cart_preview(doc, settings);
            DropdownState::Open
        };
        tracing::debug!(?state, "cart dropdown toggled");
        state
    }

    /// Document-wide click: anything outside both the toggle and the panel closes it.
    pub fn close_if_outside(&self, doc: &mut Document, target: NodeId) -> DropdownState {
        if !doc.contains(self.toggle, target) && !doc.contains(self.panel, target) {
            doc.add_class(self.panel, HIDDEN_CLASS);
        }
        self.state(doc)
    }

    // Cart contents are not fetched yet; the panel only shows a loading line.
    fn load_cart_preview(&self, doc: &mut Document, settings: &UiSettings) {
        let loading = doc.build(
            ElementBuilder::new("div")
                .class("p-4")
                .text(&settings.cart_preview_loading_text),
        );
        doc.replace_children(self.panel, [loading]);
    }
}
