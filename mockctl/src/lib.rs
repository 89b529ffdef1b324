//! Call-expectation test doubles.
//!
//! A [`Controller`] owns the expectations of one test. Doubles generated with
//! [`double`] delegate every call to it; their recorders register what calls
//! are expected and what they return. Calls nobody expected and expectations
//! nobody called are reported when the controller finishes.
//!
//! ```ignore
//! #[mockctl::double]
//! trait Greeter {
//!     fn greet(&self, name: String) -> String;
//! }
//!
//! let ctrl = mockctl::Controller::new();
//! let greeter = MockGreeter::new(&ctrl);
//! greeter.expect().greet("Tama").returns("hi".to_string());
//! assert_eq!(greeter.greet("Tama".into()), "hi");
//! ```
mod call;
mod config;
mod controller;
mod failure;
mod fallback;
mod ledger;
mod mock;
mod reporter;
mod rule;
mod times;

pub use call::*;
pub use config::*;
pub use controller::*;
pub use failure::Failure;
pub use fallback::*;
pub use ledger::{Args, ExpectationId, ReceiverId};
pub use mock::*;
pub use mockctl_macros::double;
pub use reporter::*;
pub use rule::*;
pub use times::*;
pub use Matcher::Any;
