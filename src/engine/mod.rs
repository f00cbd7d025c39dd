//! Pure quote computation and order validation.
//!
//! Both components are synchronous functions over immutable snapshots and
//! can be called from any number of threads without coordination.

mod quote;
mod validator;

pub use quote::{
    generate_quote, is_fillable, weighted_average_price, EngineError, DEFAULT_PLACES,
};
pub use validator::validate;
