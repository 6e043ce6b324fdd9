//! Newton-Raphson root finding for univariate real functions.
//!
//! The entry point is [`find_root`], which iterates
//! `x <- x - f(x) / f'(x)` from an initial guess and reports how the
//! iteration ended through a [`RootStatus`]. Abnormal terminations
//! (vanishing derivative, exhausted iteration budget) are returned as data,
//! never as panics.
//!
//! ```
//! use newton_raphson::{find_root, RootStatus};
//!
//! let result = find_root(|x| x * x - 4.0, |x| 2.0 * x, 3.0, 1e-6, 100);
//!
//! // Depending on the precision of `Num` the last step either lands on 2 exactly
//! // or falls below the threshold.
//! assert!(matches!(result.status, RootStatus::FoundRoot | RootStatus::FoundApproxRoot));
//! assert!((result.root.unwrap() - 2.0).abs() < 1e-5);
//! ```

pub mod constants;
pub mod function;
pub mod math;
pub mod result;
pub mod settings;

pub use function::{FunctionWithSlope, WithSlope};
pub use math::{find_root, find_root_of, find_root_with};
pub use result::{NoRootError, Root, RootResult, RootStatus};
pub use settings::NewtonSettings;

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("one of the `f32` or `f64` features must be enabled");

#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "the `f32` and `f64` features are mutually exclusive, build `f32` with `--no-default-features`"
);

#[cfg(all(feature = "f32", not(feature = "f64")))]
pub type Num = f32;
#[cfg(feature = "f64")]
pub type Num = f64;
