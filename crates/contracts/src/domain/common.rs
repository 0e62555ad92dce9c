use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::descriptor::ResourceDescriptor;

/// A backend-managed record.
///
/// Identity is set-once: `id()` is `None` until the backend assigns it
/// on creation and immutable thereafter.
pub trait Record: Clone + std::fmt::Debug + Serialize + DeserializeOwned + 'static {
    fn descriptor() -> &'static ResourceDescriptor;

    fn id(&self) -> Option<i64>;
}
