//! Page events routed into the controller and what handling them produced.

use cart_client::AddToCartOutcome;
use page::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Submit { target: NodeId },
    Click { target: NodeId },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The browser's default action (navigation, native submit) was suppressed.
    pub default_prevented: bool,
}

#[derive(Debug)]
pub enum SubmitResult {
    /// The page has no add-to-cart form with a submit button.
    NotRegistered,
    /// The submit control is still disabled by an earlier submission.
    AlreadyInFlight,
    Completed(AddToCartOutcome),
}
