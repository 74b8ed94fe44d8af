use page::{Document, NodeId};

use crate::dropdown::DropdownBinding;

pub const ADD_TO_CART_FORM_ID: &str = "add-to-cart-form";
pub const CART_BADGE_CLASS: &str = "cart-badge";
pub const MINI_CART_ID: &str = "mini-cart-preview";
pub const DROPDOWN_TOGGLE_ID: &str = "cart-dropdown-toggle";
pub const DROPDOWN_PANEL_ID: &str = "cart-dropdown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormBinding {
    pub form: NodeId,
    pub submit_button: NodeId,
}

/// Handles to every cart element the page provides, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRegistry {
    pub add_to_cart: Option<FormBinding>,
    pub cart_badges: Vec<NodeId>,
    pub mini_cart: Option<NodeId>,
    pub dropdown: Option<DropdownBinding>,
}

impl ElementRegistry {
    pub fn bind(doc: &Document) -> Self {
        let add_to_cart = doc.get_element_by_id(ADD_TO_CART_FORM_ID).and_then(|form| {
            doc.query_descendant(form, "button", Some(("type", "submit")))
                .map(|submit_button| FormBinding {
                    form,
                    submit_button,
                })
        });

        let dropdown = match (
            doc.get_element_by_id(DROPDOWN_TOGGLE_ID),
            doc.get_element_by_id(DROPDOWN_PANEL_ID),
        ) {
            (Some(toggle), Some(panel)) => Some(DropdownBinding { toggle, panel }),
            _ => None,
        };

        let registry = Self {
            add_to_cart,
            cart_badges: doc.get_elements_by_class_name(CART_BADGE_CLASS),
            mini_cart: doc.get_element_by_id(MINI_CART_ID),
            dropdown,
        };
        tracing::debug!(
            add_to_cart = registry.add_to_cart.is_some(),
            badges = registry.cart_badges.len(),
            mini_cart = registry.mini_cart.is_some(),
            dropdown = registry.dropdown.is_some(),
            "bound cart elements"
        );
        registry
    }
}
