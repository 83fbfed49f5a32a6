//! Domain modules for the two dashboard views.
//!
//! - [`home`]: the aggregate view summarizing every country.
//! - [`detail`]: the per-country drill-down view.

pub mod detail;
pub mod home;
