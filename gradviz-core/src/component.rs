mod chain;
mod inspect;
mod mapped;
mod mapped_err;

/// The core trait for gradviz computation units.
///
/// A `Component` maps an input to an output, possibly failing with a
/// component-specific error. Components must be deterministic and free of
/// side effects: calling one twice with the same input returns the same
/// result, bit for bit. The evaluation pipeline (catalog lookup, surface
/// sampling, gradient summary) is built entirely from such units, so a full
/// recomputation cycle is just a sequence of calls with no shared state.
///
/// ## Composing components
///
/// - [`Component::chain()`] runs two components in sequence.
/// - [`Component::map()`] adapts input and output types, which is how
///   intermediate results are carried alongside a component's own output.
/// - [`Component::map_err()`] lifts a component's error into a shared type so
///   that differing components become chainable.
/// - [`Component::inspect()`] observes calls without changing behavior, the
///   supported way to watch a pipeline run.
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type; infallible components
    /// use [`std::convert::Infallible`].
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this component with another.
    ///
    /// The first component's output type must match the second's input type,
    /// and both must share an error type (see [`Component::map_err()`]).
    ///
    /// # Example
    /// ```
    /// use std::convert::Infallible;
    /// use gradviz_core::Component;
    ///
    /// struct Square;
    /// impl Component for Square {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, x: f64) -> Result<f64, Self::Error> {
    ///         Ok(x * x)
    ///     }
    /// }
    ///
    /// struct Negate;
    /// impl Component for Negate {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, x: f64) -> Result<f64, Self::Error> {
    ///         Ok(-x)
    ///     }
    /// }
    ///
    /// // The downward-opening paraboloid along one axis: -(x²).
    /// let dome = Square.chain(Negate);
    /// assert_eq!(dome.call(3.0).unwrap(), -9.0);
    /// ```
    fn chain<Next>(
        self,
        next: Next,
    ) -> impl Component<Input = Self::Input, Output = Next::Output, Error = Self::Error>
    where
        Self: Sized,
        Next: Component<Input = Self::Output, Error = Self::Error>,
    {
        chain::Chain {
            first: self,
            second: next,
        }
    }

    /// Transforms this component's input and output types.
    ///
    /// `input_map` extracts this component's input from a wrapping type, and
    /// `output_map` combines that wrapping value with the raw output. Because
    /// `output_map` receives the original input by value, this is the idiom
    /// for keeping an upstream result alongside what a downstream component
    /// derives from it.
    ///
    /// # Example
    /// ```
    /// use std::convert::Infallible;
    /// use gradviz_core::Component;
    ///
    /// struct Magnitude;
    /// impl Component for Magnitude {
    ///     type Input = [f64; 2];
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, v: [f64; 2]) -> Result<f64, Self::Error> {
    ///         Ok(v[0].hypot(v[1]))
    ///     }
    /// }
    ///
    /// // Keep the vector together with its length.
    /// let tagged = Magnitude.map(|v: &[f64; 2]| *v, |v, len| (v, len));
    /// assert_eq!(tagged.call([3.0, 4.0]).unwrap(), ([3.0, 4.0], 5.0));
    /// ```
    fn map<InputMap, OutputMap, In, Out>(
        self,
        input_map: InputMap,
        output_map: OutputMap,
    ) -> impl Component<Input = In, Output = Out, Error = Self::Error>
    where
        Self: Sized,
        InputMap: Fn(&In) -> Self::Input,
        OutputMap: Fn(In, Self::Output) -> Out,
    {
        mapped::Mapped::new(self, input_map, output_map)
    }

    /// Transforms this component's error into a different type.
    ///
    /// Components with different error types cannot be chained directly;
    /// lifting each into a shared error enum with `map_err` makes them
    /// compatible.
    fn map_err<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl Component<Input = Self::Input, Output = Self::Output, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
        NewError: std::error::Error + Send + Sync + 'static,
    {
        mapped_err::MappedErr::new(self, error_map)
    }

    /// Inspects inputs and outputs without modifying behavior.
    ///
    /// `input_handler` runs before the call, `output_handler` after a
    /// successful one. Handlers see references only, so the wrapped
    /// component behaves identically.
    ///
    /// # Example
    /// ```
    /// use std::convert::Infallible;
    /// use gradviz_core::Component;
    ///
    /// struct Square;
    /// impl Component for Square {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, x: f64) -> Result<f64, Self::Error> {
    ///         Ok(x * x)
    ///     }
    /// }
    ///
    /// let watched = Square.inspect(
    ///     |x| println!("evaluating at {x}"),
    ///     |z| println!("surface height {z}"),
    /// );
    ///
    /// watched.call(2.0);
    /// ```
    fn inspect<InputHandler, OutputHandler>(
        self,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> impl Component<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        InputHandler: Fn(&Self::Input),
        OutputHandler: Fn(&Self::Output),
    {
        inspect::Inspect {
            component: self,
            input_handler,
            output_handler,
        }
    }
}
