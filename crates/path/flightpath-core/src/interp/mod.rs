//! Interpolation helpers shared by the sampler and the time driver.
//!
//! - quaternion hemisphere alignment (shortest-arc sign correction)
//! - guarded quaternion normalization
//! - easing polynomials

pub mod functions;

pub use functions::{align_hemispheres, align_window, ease, normalize_or};
