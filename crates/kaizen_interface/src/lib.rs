//! Trait definitions for the Kaizen video analysis library.
//!
//! Capabilities are exposed through separate traits so backends implement
//! only what they support, with compile-time checking at the call sites.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{KaizenDriver, Video, Vision};
pub use types::ModelMetadata;
