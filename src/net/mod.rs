//! Network layer: typed wire payloads and the HTTP calls that produce them.
//!
//! DESIGN
//! ======
//! Payload types and their parse steps are plain serde code so they run in
//! host tests; the actual HTTP calls live behind the `hydrate` feature with
//! server-side stubs.

pub mod api;
pub mod places;
pub mod types;
