//! Tab generation contract of the object describer.
//!
//! [`ObjectDescriber`] turns an object into a [`ContentResponse`] by asking a
//! [`TabsGenerator`] for its tabs. With the `fake` feature, [`fake`] holds a
//! call-expectation double of the generator for tests of its consumers.
mod component;
mod config;
mod context;
mod error;
mod generator;
mod object;

pub use component::*;
pub use config::*;
pub use context::*;
pub use error::Error;
pub use generator::TabsGenerator;
pub use object::ObjectDescriber;

/// Test double of [`TabsGenerator`].
#[cfg(feature = "fake")]
pub mod fake {
    pub use crate::generator::{MockTabsGenerator, MockTabsGeneratorRecorder};
}
