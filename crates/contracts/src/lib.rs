//! Shared contracts between the achat frontend and its REST backend.
//!
//! Holds the flat record types for each resource, the per-resource
//! endpoint descriptors, the `ResourceClient` seam, and the generic
//! `ListViewModel`/`FormState` pair that every resource view is an
//! instantiation of.

pub mod client;
pub mod descriptor;
pub mod domain;
pub mod enums;
pub mod error;
pub mod form;
pub mod list;

pub use client::ResourceClient;
pub use descriptor::ResourceDescriptor;
pub use error::Error;
pub use form::FormState;
pub use list::ListViewModel;
