//! The unit of work of a per-file pipeline.
//!
//! Stages own their input and hand the next stage an owned output, so a file
//! moves through read, parse and rewrite without shared mutable state.

use crate::errors::ReorderError;
use std::any::Any;
use std::marker::PhantomData;

/// One step of a per-file pipeline.
pub trait Stage {
    type Input;
    type Output;
    type Error;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Label used in logs, timings and error messages.
    fn name(&self) -> &str;
}

/// A stage backed by a closure.
///
/// ```rust,ignore
/// let read = FnStage::new("Read", |task: FileTask| io::read_file(&task.path));
/// ```
pub struct FnStage<F, I, O, E> {
    name: &'static str,
    func: F,
    _types: PhantomData<fn(I) -> Result<O, E>>,
}

impl<F, I, O, E> FnStage<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self {
            name,
            func,
            _types: PhantomData,
        }
    }
}

impl<F, I, O, E> Stage for FnStage<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn execute(&self, input: I) -> Result<O, E> {
        (self.func)(input)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Object-safe view of a [`Stage`], so stages with different input and
/// output types can sit in one `Vec`.
pub(crate) trait ErasedStage: Send + Sync {
    fn run_boxed(&self, input: Box<dyn Any>) -> Result<Box<dyn Any>, ReorderError>;

    fn label(&self) -> &str;
}

impl<S> ErasedStage for S
where
    S: Stage + Send + Sync,
    S::Input: 'static,
    S::Output: 'static,
    S::Error: Into<ReorderError>,
{
    fn run_boxed(&self, input: Box<dyn Any>) -> Result<Box<dyn Any>, ReorderError> {
        let input = input.downcast::<S::Input>().map_err(|_| {
            ReorderError::pipeline(format!("stage '{}' received a value of the wrong type", self.name()))
        })?;
        let output = self.execute(*input).map_err(Into::into)?;
        Ok(Box::new(output))
    }

    fn label(&self) -> &str {
        self.name()
    }
}
