//! Wire types shared between the cart transport and the page controller.

pub mod domain;
pub mod error;
pub mod protocol;
