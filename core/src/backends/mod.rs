#![deny(missing_docs)]

//! # Backends
//!
//! Pluggable renderers turning a [`MetadataSet`](crate::metadata::MetadataSet)
//! into the generated artifact.
//!
//! - **traits**: Defines `MetadataBackend`.
//! - **entt**: The default C++ header registering entt reflection metadata.
//! - **json**: A JSON manifest for tooling that is not C++.

pub mod entt;
pub mod json;
pub mod traits;

pub use entt::EnttMetaBackend;
pub use json::JsonBackend;
pub use traits::MetadataBackend;
