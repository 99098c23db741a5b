/// A trait for state types that advance by one explicit integration step.
///
/// `Delta` is the step size, usually a [`Time`](uom::si::f64::Time).
/// The implementation decides how the derivative is applied, which lets a state
/// carry update rules such as clamping one component before it feeds another.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
