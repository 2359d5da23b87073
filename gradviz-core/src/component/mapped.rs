use std::marker::PhantomData;

use super::Component;

/// A wrapper that adapts a component's input and output types.
///
/// Used internally by `.map()`. The original input is passed by value to the
/// output mapping so callers can keep it alongside the derived result.
pub(crate) struct Mapped<C, InputMap, OutputMap, In, Out> {
    component: C,
    input_map: InputMap,
    output_map: OutputMap,
    _marker: PhantomData<(In, Out)>,
}

impl<C, InputMap, OutputMap, In, Out> Mapped<C, InputMap, OutputMap, In, Out> {
    pub(crate) fn new(component: C, input_map: InputMap, output_map: OutputMap) -> Self {
        Self {
            component,
            input_map,
            output_map,
            _marker: PhantomData,
        }
    }
}

impl<C, InputMap, OutputMap, In, Out> Component for Mapped<C, InputMap, OutputMap, In, Out>
where
    C: Component,
    InputMap: Fn(&In) -> C::Input,
    OutputMap: Fn(In, C::Output) -> Out,
{
    type Input = In;
    type Output = Out;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let inner_input = (self.input_map)(&input);
        let inner_output = self.component.call(inner_input)?;
        Ok((self.output_map)(input, inner_output))
    }
}
