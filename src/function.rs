use crate::Num;

/// A real-valued function with its derivative (slope).
pub trait FunctionWithSlope {
    /// f(x)
    fn value(&self, x: Num) -> Num;

    /// f'(x)
    fn slope(&self, x: Num) -> Num;
}

/// Pairs two closures into a [`FunctionWithSlope`].
#[derive(Debug, Clone, Copy)]
pub struct WithSlope<F, D> {
    pub value: F,
    pub slope: D,
}

impl<F, D> WithSlope<F, D>
where
    F: Fn(Num) -> Num,
    D: Fn(Num) -> Num,
{
    pub fn new(value: F, slope: D) -> Self {
        Self { value, slope }
    }
}

impl<F, D> FunctionWithSlope for WithSlope<F, D>
where
    F: Fn(Num) -> Num,
    D: Fn(Num) -> Num,
{
    #[inline]
    fn value(&self, x: Num) -> Num {
        (self.value)(x)
    }

    #[inline]
    fn slope(&self, x: Num) -> Num {
        (self.slope)(x)
    }
}

impl<T: FunctionWithSlope + ?Sized> FunctionWithSlope for &T {
    #[inline]
    fn value(&self, x: Num) -> Num {
        (**self).value(x)
    }

    #[inline]
    fn slope(&self, x: Num) -> Num {
        (**self).slope(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cubic;

    impl FunctionWithSlope for Cubic {
        fn value(&self, x: Num) -> Num {
            x.powi(3) - x - 2.0
        }

        fn slope(&self, x: Num) -> Num {
            3.0 * x.powi(2) - 1.0
        }
    }

    #[test]
    fn closures_are_forwarded() {
        let f = WithSlope::new(|x: Num| x * x, |x: Num| 2.0 * x);

        assert_eq!(f.value(3.0), 9.0);
        assert_eq!(f.slope(3.0), 6.0);
    }

    #[test]
    fn references_are_functions_too() {
        let cubic = &Cubic;

        assert_eq!(cubic.value(2.0), 4.0);
        assert_eq!(cubic.slope(2.0), 11.0);
    }
}
