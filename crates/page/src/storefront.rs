use shared::protocol::FormField;

use crate::{builder::ElementBuilder, dom::Document};

/// Storefront page skeleton: header and mobile cart badges, cart dropdown,
/// mini cart container and an add-to-cart form.
#[derive(Debug, Clone)]
pub struct StorefrontPage {
    pub form_action: String,
    pub fields: Vec<FormField>,
    pub submit_label: String,
    pub cart_url: String,
}

impl StorefrontPage {
    pub fn new(form_action: impl Into<String>) -> Self {
        Self {
            form_action: form_action.into(),
            fields: Vec::new(),
            submit_label: "Add to Cart".to_string(),
            cart_url: "/booking/cart/".to_string(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::new(name, value));
        self
    }

    pub fn build(&self) -> Document {
        let mut doc = Document::new();
        let body = doc.body();

        doc.append_built(
            body,
            ElementBuilder::new("header")
                .class("site-header")
                .child(
                    ElementBuilder::new("a")
                        .id("cart-dropdown-toggle")
                        .attr("href", &self.cart_url)
                        .text("Cart")
                        .child(cart_badge()),
                )
                .child(
                    ElementBuilder::new("div")
                        .id("cart-dropdown")
                        .class("hidden absolute right-0 mt-2 w-80 bg-white rounded-lg shadow-lg"),
                ),
        );
        doc.append_built(
            body,
            ElementBuilder::new("nav").class("mobile-nav").child(
                ElementBuilder::new("a")
                    .attr("href", &self.cart_url)
                    .text("Cart")
                    .child(cart_badge()),
            ),
        );
        doc.append_built(
            body,
            ElementBuilder::new("div")
                .id("mini-cart-preview")
                .class("hidden fixed bottom-4 right-4 z-40"),
        );

        let inputs = self.fields.iter().map(|field| {
            ElementBuilder::new("input")
                .attr("type", "hidden")
                .attr("name", &field.name)
                .attr("value", &field.value)
        });
        doc.append_built(
            body,
            ElementBuilder::new("main").child(
                ElementBuilder::new("form")
                    .id("add-to-cart-form")
                    .attr("action", &self.form_action)
                    .attr("method", "post")
                    .children(inputs)
                    .child(
                        ElementBuilder::new("button")
                            .attr("type", "submit")
                            .class("btn btn-primary")
                            .text(&self.submit_label),
                    ),
            ),
        );

        doc
    }
}

fn cart_badge() -> ElementBuilder {
    ElementBuilder::new("span")
        .class("cart-badge")
        .attr("style", "display: none")
        .text("0")
}
