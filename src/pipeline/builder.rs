//! Composes stages into a typed per-file pipeline.

use super::stage::{ErasedStage, Stage};
use crate::errors::ReorderError;
use std::any::Any;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Accumulates stages. `I` is what the finished pipeline accepts and `T` is
/// what the most recently added stage produces, so a stage whose input does
/// not match `T` is rejected at compile time.
pub struct PipelineBuilder<I, T = I> {
    steps: Vec<Box<dyn ErasedStage>>,
    _flow: PhantomData<fn(I) -> T>,
}

impl<I> PipelineBuilder<I> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            _flow: PhantomData,
        }
    }
}

impl<I> Default for PipelineBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T> PipelineBuilder<I, T> {
    pub fn stage<S>(mut self, stage: S) -> PipelineBuilder<I, S::Output>
    where
        S: Stage<Input = T> + Send + Sync + 'static,
        S::Input: 'static,
        S::Output: 'static,
        S::Error: Into<ReorderError>,
    {
        self.steps.push(Box::new(stage));
        PipelineBuilder {
            steps: self.steps,
            _flow: PhantomData,
        }
    }

    /// Add optional stages. The closure has to keep the output type, which
    /// is what a stage such as `Write` (file in, same file out) does.
    pub fn when<F>(self, condition: bool, add: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            add(self)
        } else {
            self
        }
    }

    pub fn build(self) -> BuiltPipeline<I, T> {
        BuiltPipeline {
            steps: self.steps,
            _flow: PhantomData,
        }
    }
}

/// An immutable pipeline, shared by reference across worker threads.
pub struct BuiltPipeline<I, T> {
    steps: Vec<Box<dyn ErasedStage>>,
    _flow: PhantomData<fn(I) -> T>,
}

impl<I: 'static, T: 'static> BuiltPipeline<I, T> {
    pub fn execute(&self, input: I) -> Result<T, ReorderError> {
        self.run(input, |_| {})
    }

    /// Like [`execute`](Self::execute), also returning how long each stage took.
    pub fn execute_with_timing(&self, input: I) -> Result<(T, Vec<StageTiming>), ReorderError> {
        let mut timings = Vec::with_capacity(self.steps.len());
        let output = self.run(input, |timing| timings.push(timing))?;
        Ok((output, timings))
    }

    pub fn stage_count(&self) -> usize {
        self.steps.len()
    }

    fn run(&self, input: I, mut record: impl FnMut(StageTiming)) -> Result<T, ReorderError> {
        let mut value: Box<dyn Any> = Box::new(input);

        for step in &self.steps {
            tracing::trace!("Running stage {}", step.label());
            let started = Instant::now();
            value = step.run_boxed(value).map_err(|e| match e {
                ReorderError::Pipeline(message) => {
                    ReorderError::pipeline(format!("{} stage: {}", step.label(), message))
                }
                other => other,
            })?;
            record(StageTiming {
                name: step.label().to_string(),
                duration: started.elapsed(),
            });
        }

        value
            .downcast::<T>()
            .map(|output| *output)
            .map_err(|_| ReorderError::pipeline("last stage produced an unexpected type"))
    }
}

/// Wall time spent in one stage.
#[derive(Debug, Clone)]
pub struct StageTiming {
    pub name: String,
    pub duration: Duration,
}

impl StageTiming {
    pub fn format(&self) -> String {
        format!("{}: {:.3}ms", self.name, self.duration.as_secs_f64() * 1000.0)
    }
}
