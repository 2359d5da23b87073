use std::{error::Error as StdError, marker::PhantomData};

use super::Component;

/// A wrapper that transforms a component's error type.
///
/// Used internally by `.map_err()`.
pub(crate) struct MappedErr<C, ErrorMap, NewError> {
    component: C,
    error_map: ErrorMap,
    _marker: PhantomData<NewError>,
}

impl<C, ErrorMap, NewError> MappedErr<C, ErrorMap, NewError> {
    pub(crate) fn new(component: C, error_map: ErrorMap) -> Self {
        Self {
            component,
            error_map,
            _marker: PhantomData,
        }
    }
}

impl<C, ErrorMap, NewError> Component for MappedErr<C, ErrorMap, NewError>
where
    C: Component,
    ErrorMap: Fn(C::Error) -> NewError,
    NewError: StdError + Send + Sync + 'static,
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = NewError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.component
            .call(input)
            .map_err(|error| (self.error_map)(error))
    }
}
