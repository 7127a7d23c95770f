//! Domain models used inside the server.
//!
//! These types sit between the controller, service and data layers and carry the
//! conversions to and from entity models and DTOs.

pub mod series;
