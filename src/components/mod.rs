//! Reusable UI components.

pub mod address_form;
pub mod alert_modal;
pub mod cart_badge;
pub mod cart_controls;
