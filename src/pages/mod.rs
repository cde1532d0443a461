//! Page components, one per route.

pub mod cart;
pub mod checkout;
pub mod login;
pub mod marketplace;
