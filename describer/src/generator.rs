use std::sync::Arc;

use crate::{Component, Context, Error, TabsGeneratorConfig};

/// Builds the tabs of an object view.
///
/// Implementations should give up with [`Error::Cancelled`] or
/// [`Error::DeadlineExceeded`] once `ctx` is done.
#[cfg_attr(feature = "fake", mockctl::double)]
pub trait TabsGenerator: Send + Sync {
    fn generate(&self, ctx: &Context, config: TabsGeneratorConfig) -> Result<Vec<Component>, Error>;
}

impl<G: TabsGenerator + ?Sized> TabsGenerator for Arc<G> {
    fn generate(&self, ctx: &Context, config: TabsGeneratorConfig) -> Result<Vec<Component>, Error> {
        (**self).generate(ctx, config)
    }
}
