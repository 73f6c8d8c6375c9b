//! Threshold resolution for climate indices.
//!
//! A threshold is resolved once per index invocation along exactly one of
//! three paths, picked by [`ThresholdSource::select`]:
//!
//! ```text
//!  explicit given? ──yes──▶ Explicit(value)
//!        │no
//!  reference given? ─yes──▶ Reference { series, percentile }
//!        │no
//!        └───────────────▶ SelfDerived { percentile }   (primary series)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use climdex_threshold::{Comparison, resolve};
//!
//! let reference: Vec<f64> = (1..=100).map(f64::from).collect();
//! let p90 = resolve(None, Some(&reference[..]), 90.0, &[]).unwrap();
//! assert!((p90 - 90.1).abs() < 1e-9);
//! assert!(Comparison::Ge.holds(95.0, p90));
//! assert!(!Comparison::Ge.holds(f64::NAN, p90));
//! ```

mod comparison;
mod error;
mod source;

pub use comparison::Comparison;
pub use error::ThresholdError;
pub use source::{ThresholdSource, resolve};
