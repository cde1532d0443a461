//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `address`, `ui`) so individual
//! components can depend on small focused models. Each module is plain
//! data plus pure reducers, wrapped in `RwSignal`s by the app shell, so
//! the interesting logic runs in host tests without a browser.

pub mod address;
pub mod cart;
pub mod ui;
