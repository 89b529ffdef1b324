use std::any::Any;
use std::fmt::Debug;

#[derive(Debug, PartialEq)]
pub(crate) enum Output<O> {
    Found(O),
    /// No return value was configured
    Zero,
    ErrorCalledOnce,
}

/// Behavior of mock
pub enum Behavior<I, O> {
    /// Behaves with a function
    Function {
        clone: fn(&I) -> I,
        call: Box<dyn FnMut(I) -> O + Send + 'static>,
    },
    /// Returns a constant value
    Const(Box<dyn Iterator<Item = O> + Send + 'static>),
    /// Returns the value once
    Once(Option<O>),
}

impl<I, O: Debug> Debug for Behavior<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function { .. } => f.debug_tuple("Function(_)").finish(),
            Self::Const(_) => f.debug_tuple("Const(_)").finish(),
            Self::Once(once) => f.debug_tuple("Once").field(once).finish(),
        }
    }
}

impl<I, O> Behavior<I, O> {
    pub(crate) fn called(&mut self, input: &I) -> Output<O> {
        match self {
            Behavior::Function { clone, call } => Output::Found(call(clone(input))),
            Behavior::Const(cons) => cons.next().map_or(Output::Zero, Output::Found),
            Behavior::Once(once) => once.take().map_or(Output::ErrorCalledOnce, Output::Found),
        }
    }
}

mockctl_macros::create_behaviors!();

/// A behavior with its argument and output types erased, as stored by the ledger.
pub(crate) trait Respond: Send {
    fn respond(&mut self, args: &dyn Any) -> Output<Box<dyn Any + Send>>;
}

impl<I: 'static, O: Send + 'static> Respond for Behavior<I, O> {
    fn respond(&mut self, args: &dyn Any) -> Output<Box<dyn Any + Send>> {
        // The ledger only runs a behavior after its matcher accepted `I`.
        let Some(input) = args.downcast_ref::<I>() else {
            unreachable!(
                "behavior for `{}` received arguments of another type",
                std::any::type_name::<I>()
            )
        };
        match self.called(input) {
            Output::Found(output) => Output::Found(Box::new(output)),
            Output::Zero => Output::Zero,
            Output::ErrorCalledOnce => Output::ErrorCalledOnce,
        }
    }
}

/// Responder of an expectation that was given no return value.
pub(crate) struct Unset;

impl Respond for Unset {
    fn respond(&mut self, _: &dyn Any) -> Output<Box<dyn Any + Send>> {
        Output::Zero
    }
}
