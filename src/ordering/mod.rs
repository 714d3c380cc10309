//! Ordering policy: rules that bucket members and the stable reorder engine.

pub mod engine;
pub mod rules;

pub use engine::{bucket_of, reorder, reorder_declarations};
pub use rules::{MethodClass, OrderingRule};
