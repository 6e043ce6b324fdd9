use std::fmt;

use thiserror::Error;

use crate::Num;

/// How a Newton-Raphson run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootStatus {
    /// No root found, without further detail.
    ///
    /// Reserved: [`find_root`](crate::find_root) never produces it.
    NoConfirmedRoot,
    /// `f(root) == 0` exactly.
    FoundRoot,
    /// The last step was smaller than the relative error threshold.
    FoundApproxRoot,
    /// The iteration budget ran out.
    MaxIterationsReached,
    /// `f'(x) == 0`, so the Newton step is undefined.
    DerivativeZero,
}

impl RootStatus {
    /// Numeric status code, `0..=4` in declaration order.
    pub fn code(self) -> u8 {
        match self {
            RootStatus::NoConfirmedRoot => 0,
            RootStatus::FoundRoot => 1,
            RootStatus::FoundApproxRoot => 2,
            RootStatus::MaxIterationsReached => 3,
            RootStatus::DerivativeZero => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(RootStatus::NoConfirmedRoot),
            1 => Some(RootStatus::FoundRoot),
            2 => Some(RootStatus::FoundApproxRoot),
            3 => Some(RootStatus::MaxIterationsReached),
            4 => Some(RootStatus::DerivativeZero),
            _ => None,
        }
    }

    /// Whether a run ending in this status carries a root.
    pub fn is_root(self) -> bool {
        matches!(self, RootStatus::FoundRoot | RootStatus::FoundApproxRoot)
    }
}

impl fmt::Display for RootStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RootStatus::NoConfirmedRoot => "No confirmed root",
            RootStatus::FoundRoot => "Root found",
            RootStatus::FoundApproxRoot => "Approx. root found",
            RootStatus::MaxIterationsReached => "Max. iterations reached",
            RootStatus::DerivativeZero => "Derivative function is zero",
        };

        f.write_str(msg)
    }
}

/// Outcome of [`find_root`](crate::find_root).
///
/// `root` is `Some` exactly when `status.is_root()`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootResult {
    pub status: RootStatus,
    pub root: Option<Num>,
    pub iterations: usize,
}

impl RootResult {
    pub(crate) fn found(status: RootStatus, root: Num, iterations: usize) -> Self {
        debug_assert!(status.is_root());

        Self {
            status,
            root: Some(root),
            iterations,
        }
    }

    pub(crate) fn not_found(status: RootStatus, iterations: usize) -> Self {
        debug_assert!(!status.is_root());

        Self {
            status,
            root: None,
            iterations,
        }
    }

    /// Converts the outcome into a `Result`, for callers that want to
    /// propagate a missing root with `?`.
    pub fn into_result(self) -> Result<Root, NoRootError> {
        match (self.status, self.root) {
            (RootStatus::FoundRoot | RootStatus::FoundApproxRoot, Some(value)) => Ok(Root {
                value,
                exact: self.status == RootStatus::FoundRoot,
                iterations: self.iterations,
            }),
            (status @ (RootStatus::FoundRoot | RootStatus::FoundApproxRoot), None) => {
                Err(NoRootError::MissingRoot { status })
            }
            (RootStatus::MaxIterationsReached, _) => Err(NoRootError::MaxIterationsReached {
                iterations: self.iterations,
            }),
            (RootStatus::DerivativeZero, _) => Err(NoRootError::DerivativeZero {
                iterations: self.iterations,
            }),
            _ => Err(NoRootError::NoConfirmedRoot),
        }
    }
}

/// A root located by [`find_root`](crate::find_root).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Root {
    pub value: Num,
    /// `f(value) == 0` exactly, as opposed to a converged approximation.
    pub exact: bool,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoRootError {
    #[error("no confirmed root")]
    NoConfirmedRoot,

    #[error("maximum number of iterations reached ({iterations})")]
    MaxIterationsReached { iterations: usize },

    #[error("derivative vanished after {iterations} iteration(s)")]
    DerivativeZero { iterations: usize },

    /// A hand-built [`RootResult`] whose status promises a root it does not carry.
    #[error("status `{status}` reported without a root value")]
    MissingRoot { status: RootStatus },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..=4 {
            let status = RootStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }

        assert_eq!(RootStatus::from_code(5), None);
    }

    #[test]
    fn only_found_statuses_carry_roots() {
        assert!(RootStatus::FoundRoot.is_root());
        assert!(RootStatus::FoundApproxRoot.is_root());
        assert!(!RootStatus::NoConfirmedRoot.is_root());
        assert!(!RootStatus::MaxIterationsReached.is_root());
        assert!(!RootStatus::DerivativeZero.is_root());
    }

    #[test]
    fn into_result_keeps_iterations() {
        let found = RootResult::found(RootStatus::FoundRoot, 2.0, 3);
        assert_eq!(
            found.into_result(),
            Ok(Root {
                value: 2.0,
                exact: true,
                iterations: 3
            })
        );

        let approx = RootResult::found(RootStatus::FoundApproxRoot, 2.0, 5);
        assert!(!approx.into_result().unwrap().exact);

        let exhausted = RootResult::not_found(RootStatus::MaxIterationsReached, 10);
        assert_eq!(
            exhausted.into_result(),
            Err(NoRootError::MaxIterationsReached { iterations: 10 })
        );

        let flat = RootResult::not_found(RootStatus::DerivativeZero, 1);
        assert_eq!(
            flat.into_result(),
            Err(NoRootError::DerivativeZero { iterations: 1 })
        );

        let unconfirmed = RootResult::not_found(RootStatus::NoConfirmedRoot, 0);
        assert_eq!(unconfirmed.into_result(), Err(NoRootError::NoConfirmedRoot));
    }

    #[test]
    fn found_status_without_root_is_not_unconfirmed() {
        let inconsistent = RootResult {
            status: RootStatus::FoundRoot,
            root: None,
            iterations: 2,
        };

        assert_eq!(
            inconsistent.into_result(),
            Err(NoRootError::MissingRoot {
                status: RootStatus::FoundRoot
            })
        );
        assert_eq!(
            NoRootError::MissingRoot {
                status: RootStatus::FoundApproxRoot
            }
            .to_string(),
            "status `Approx. root found` reported without a root value"
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            NoRootError::MaxIterationsReached { iterations: 7 }.to_string(),
            "maximum number of iterations reached (7)"
        );
        assert_eq!(RootStatus::DerivativeZero.to_string(), "Derivative function is zero");
    }
}
