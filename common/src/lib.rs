//! Types and pure logic shared by the ad board backend and the browser client.
//!
//! Everything here compiles for both native targets and `wasm32`, so the
//! ranking order and the form validation rules are computed identically on
//! each side of the HTTP boundary.

pub mod model;
pub mod ranking;
pub mod requests;
pub mod validation;
