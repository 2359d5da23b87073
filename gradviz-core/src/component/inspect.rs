use super::Component;

/// A wrapper that observes inputs and outputs without modifying behavior.
///
/// Used internally by `.inspect()`. The output handler runs only on success.
pub(crate) struct Inspect<C, InputHandler, OutputHandler> {
    pub(crate) component: C,
    pub(crate) input_handler: InputHandler,
    pub(crate) output_handler: OutputHandler,
}

impl<C, InputHandler, OutputHandler> Component for Inspect<C, InputHandler, OutputHandler>
where
    C: Component,
    InputHandler: Fn(&C::Input),
    OutputHandler: Fn(&C::Output),
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.input_handler)(&input);
        let output = self.component.call(input)?;
        (self.output_handler)(&output);
        Ok(output)
    }
}
