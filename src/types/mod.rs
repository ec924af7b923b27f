// ABOUTME: Validated domain types shared across the crate.
// ABOUTME: Resource names and the managed resource kinds.

mod kind;
mod resource_name;

pub use kind::ResourceKind;
pub use resource_name::{MAX_LABEL_LEN, ResourceName, ResourceNameError};
