/// A fully populated configuration record that partial overrides can be merged onto.
///
/// Each field present in `Self::Overrides` replaces the corresponding field of
/// `self`, and every absent field keeps its current value.
/// Resolution happens once, before a run starts, so the simulator only ever
/// sees a complete record.
///
/// # Example
///
/// ```
/// use paddle_core::Overridable;
///
/// #[derive(Debug, PartialEq)]
/// struct Hull {
///     mass: f64,
///     drag: f64,
/// }
///
/// #[derive(Default)]
/// struct HullOverrides {
///     mass: Option<f64>,
///     drag: Option<f64>,
/// }
///
/// impl Overridable for Hull {
///     type Overrides = HullOverrides;
///
///     fn with_overrides(self, overrides: &HullOverrides) -> Self {
///         Self {
///             mass: overrides.mass.unwrap_or(self.mass),
///             drag: overrides.drag.unwrap_or(self.drag),
///         }
///     }
/// }
///
/// let hull = Hull { mass: 350.0, drag: 30.0 }.with_overrides(&HullOverrides {
///     mass: Some(200.0),
///     ..HullOverrides::default()
/// });
/// assert_eq!(hull, Hull { mass: 200.0, drag: 30.0 });
/// ```
pub trait Overridable: Sized {
    /// A partial record, typically every field wrapped in `Option`.
    type Overrides;

    /// Returns `self` with every specified override applied.
    #[must_use]
    fn with_overrides(self, overrides: &Self::Overrides) -> Self;
}

/// A shape with no configurable fields.
impl Overridable for () {
    type Overrides = ();

    fn with_overrides(self, _overrides: &()) -> Self {}
}
