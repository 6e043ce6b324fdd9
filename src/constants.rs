use crate::Num;

/// Relative error threshold used by [`NewtonSettings::default`](crate::NewtonSettings).
pub const DEFAULT_RELATIVE_ERROR_THRESHOLD: Num = 1e-6;

/// Iteration cap used by [`NewtonSettings::default`](crate::NewtonSettings).
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;
