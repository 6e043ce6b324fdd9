use log::{debug, trace};

use crate::function::FunctionWithSlope;
use crate::result::{RootResult, RootStatus};
use crate::settings::NewtonSettings;
use crate::Num;

/// Approximates a root of `f` using the Newton-Raphson method.
///
/// # Arguments
/// f - The function to find a root of.
/// f_derivative - The derivative of the function.
/// initial_guess - The starting point of the iteration.
/// relative_error_threshold - Convergence is declared once a step is shorter than
///     `|x| * relative_error_threshold`, where `x` is the point the step started from.
/// max_iterations - Cap on the iteration counter. The counter is bumped at the start of
///     every pass and the run stops as soon as it reaches the cap, so at most
///     `max_iterations - 1` Newton steps are taken.
///
/// # Returns
/// A [`RootResult`] with the terminal [`RootStatus`], the root for
/// [`RootStatus::FoundRoot`] and [`RootStatus::FoundApproxRoot`], and the number of
/// iterations executed.
///
/// Both `f(x) == 0` and `f'(x) == 0` are exact comparisons. Evaluations producing NaN are
/// not detected and flow through the arithmetic.
pub fn find_root(
    f: impl Fn(Num) -> Num,
    f_derivative: impl Fn(Num) -> Num,
    initial_guess: Num,
    relative_error_threshold: Num,
    max_iterations: usize,
) -> RootResult {
    let mut x = initial_guess;
    let mut fx = f(x);

    if fx == 0.0 {
        trace!("Initial guess {x} is an exact root");
        return RootResult::found(RootStatus::FoundRoot, x, 0);
    }

    // The counter below would overshoot a zero cap on its first bump
    if max_iterations == 0 {
        debug!("Iteration cap is zero, no Newton step taken from {x}");
        return RootResult::not_found(RootStatus::MaxIterationsReached, 0);
    }

    let mut iterations = 0;

    loop {
        iterations += 1;

        if iterations >= max_iterations {
            debug!("Newton iteration stopped at cap of {max_iterations} (x = {x})");
            return RootResult::not_found(RootStatus::MaxIterationsReached, iterations);
        }

        let dfx = f_derivative(x);
        if dfx == 0.0 {
            debug!("Derivative vanished at x = {x} on iteration {iterations}");
            return RootResult::not_found(RootStatus::DerivativeZero, iterations);
        }

        let x_next = x - fx / dfx;

        let current_diff = (x_next - x).abs();
        let max_diff = x.abs() * relative_error_threshold;
        debug!("Newton iteration {iterations}: x = {x_next}, step = {current_diff}");

        x = x_next;
        if current_diff < max_diff {
            debug!("Converged to {x} after {iterations} iteration(s)");
            return RootResult::found(RootStatus::FoundApproxRoot, x, iterations);
        }

        fx = f(x);
        if fx == 0.0 {
            debug!("Hit exact root {x} after {iterations} iteration(s)");
            return RootResult::found(RootStatus::FoundRoot, x, iterations);
        }
    }
}

/// Same as [`find_root`], with the numeric controls taken from `settings`.
pub fn find_root_with(
    f: impl Fn(Num) -> Num,
    f_derivative: impl Fn(Num) -> Num,
    initial_guess: Num,
    settings: &NewtonSettings,
) -> RootResult {
    find_root(
        f,
        f_derivative,
        initial_guess,
        settings.relative_error_threshold,
        settings.max_iterations,
    )
}

/// Same as [`find_root`], for a function that knows its own slope.
pub fn find_root_of<F>(function: &F, initial_guess: Num, settings: &NewtonSettings) -> RootResult
where
    F: FunctionWithSlope + ?Sized,
{
    find_root_with(
        |x| function.value(x),
        |x| function.slope(x),
        initial_guess,
        settings,
    )
}
