use clap::ValueEnum;
use newton_raphson::{FunctionWithSlope, Num};
use serde::{Deserialize, Serialize};

/// Sample functions the demo can solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFunction {
    #[default]
    Ionic,
    Exponential,
}

impl SampleFunction {
    pub fn function(self) -> &'static dyn FunctionWithSlope {
        match self {
            SampleFunction::Ionic => &IonicForce,
            SampleFunction::Exponential => &ExponentialDifference,
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            SampleFunction::Ionic => "f(x) = -D/x^2 - A/B*e^(-x/B) + 6*C/x^7",
            SampleFunction::Exponential => "f(x) = e^(2x) - e^x - 2",
        }
    }
}

/// Net force between two ions at separation `x`: Coulomb attraction,
/// exponential core repulsion and a short range `x^-7` term.
pub struct IonicForce;

impl IonicForce {
    const A: Num = 728.0;
    const B: Num = 0.317;
    const C: Num = 0.486;
    const D: Num = -8.99 * 1.6;
}

impl FunctionWithSlope for IonicForce {
    // f(x) = -D/x^2 - A/B*e^(-x/B) + 6*C/x^7
    fn value(&self, x: Num) -> Num {
        let (a, b, c, d) = (Self::A, Self::B, Self::C, Self::D);

        -d / x.powi(2) - a / b * (-x / b).exp() + 6.0 * c / x.powi(7)
    }

    // f'(x) = 2*D/x^3 + A/B^2*e^(-x/B) - 42*C/x^8
    fn slope(&self, x: Num) -> Num {
        let (a, b, c, d) = (Self::A, Self::B, Self::C, Self::D);

        2.0 * d / x.powi(3) + a / b.powi(2) * (-x / b).exp() - 42.0 * c / x.powi(8)
    }
}

pub struct ExponentialDifference;

impl FunctionWithSlope for ExponentialDifference {
    // f(x) = e^(2x) - e^x - 2
    fn value(&self, x: Num) -> Num {
        (2.0 * x).exp() - x.exp() - 2.0
    }

    // f'(x) = 2*e^(2x) - e^x
    fn slope(&self, x: Num) -> Num {
        2.0 * (2.0 * x).exp() - x.exp()
    }
}
