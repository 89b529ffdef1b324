use crate::{ContentResponse, Context, Error, ObjectRef, TabsGenerator, TabsGeneratorConfig};

/// Describes single objects by asking a [`TabsGenerator`] for their tabs.
#[derive(Debug, Clone)]
pub struct ObjectDescriber<G> {
    generator: G,
}

impl<G: TabsGenerator> ObjectDescriber<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn describe(&self, ctx: &Context, object: &ObjectRef) -> Result<ContentResponse, Error> {
        self.describe_with(ctx, TabsGeneratorConfig::new(object.clone()))
    }

    pub fn describe_with(
        &self,
        ctx: &Context,
        config: TabsGeneratorConfig,
    ) -> Result<ContentResponse, Error> {
        let object = config.object.clone();
        if let Some(err) = ctx.err() {
            tracing::debug!(%object, %err, "context done before describing");
            return Err(err);
        }
        let title = config.title.clone();
        let components = self
            .generator
            .generate(ctx, config)
            .inspect_err(|err| tracing::warn!(%object, %err, "generating tabs failed"))?;
        tracing::debug!(%object, tabs = components.len(), "described object");
        Ok(ContentResponse { title, components })
    }

    /// Describes every object on its own thread, keeping the input order.
    pub fn describe_all(
        &self,
        ctx: &Context,
        objects: &[ObjectRef],
    ) -> Vec<Result<ContentResponse, Error>> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = objects
                .iter()
                .map(|object| scope.spawn(move || self.describe(ctx, object)))
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}
