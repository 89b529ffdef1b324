mod behavior;
mod matcher;

pub use behavior::*;
pub use matcher::*;

pub(crate) use behavior::{Output, Respond, Unset};
pub(crate) use matcher::ArgsMatcher;
