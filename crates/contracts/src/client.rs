use serde_json::Value;

use crate::domain::common::Record;
use crate::error::Error;

/// Seam between the view-model layer and the HTTP transport.
///
/// One implementation per deployment target: the frontend provides a
/// gloo-net client parameterized by the record's descriptor; tests
/// provide in-memory stores. Payloads for `create`/`update` are the
/// typed JSON shape produced by `FormState::to_payload`; `update` is a
/// full-record replace and must include the identity field.
///
/// No `Send` bounds: the sole production consumer is single-threaded
/// wasm.
#[allow(async_fn_in_trait)]
pub trait ResourceClient: Clone {
    type Record: Record;

    async fn fetch_all(&self) -> Result<Vec<Self::Record>, Error>;

    async fn fetch_by_id(&self, id: i64) -> Result<Self::Record, Error>;

    async fn create(&self, payload: Value) -> Result<Self::Record, Error>;

    async fn update(&self, payload: Value) -> Result<Self::Record, Error>;

    async fn remove(&self, id: i64) -> Result<(), Error>;

    async fn cancel(&self, id: i64) -> Result<(), Error>;

    /// Submit a relation assignment. Argument order is the backend's:
    /// assigned entity first, target second (see `RelationEndpoint`).
    async fn assign_relation(&self, first: i64, second: i64) -> Result<(), Error>;
}
