use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct UiSettings {
    pub notification_timeout: Duration,
    pub mini_cart_timeout: Duration,
    pub currency_symbol: String,
    pub cart_url: String,
    pub checkout_url: String,
    pub submitting_label: String,
    pub added_fallback_message: String,
    pub generic_error_message: String,
    pub cart_preview_loading_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            notification_timeout: Duration::from_millis(5000),
            mini_cart_timeout: Duration::from_millis(5000),
            currency_symbol: "£".into(),
            cart_url: "/booking/cart/".into(),
            checkout_url: "/booking/checkout/".into(),
            submitting_label: "Adding...".into(),
            added_fallback_message: "Added to cart!".into(),
            generic_error_message: "An error occurred. Please try again.".into(),
            cart_preview_loading_text: "Loading cart...".into(),
        }
    }
}
