//! gloo-net implementation of the `ResourceClient` seam.
//!
//! One stateless client per record type; every endpoint path comes from
//! the record's descriptor. Non-2xx responses map to `Error::Status`
//! (404 on a by-id fetch to `NotFound`), network and decode failures to
//! `Error::Transport`.

use std::marker::PhantomData;

use gloo_net::http::{Request, Response};
use serde_json::Value;

use contracts::domain::common::Record;
use contracts::{Error, ResourceClient};

use crate::shared::api_utils::api_url;

pub struct HttpResourceClient<R> {
    _record: PhantomData<R>,
}

impl<R> HttpResourceClient<R> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<R> Default for HttpResourceClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for HttpResourceClient<R> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

fn transport(e: gloo_net::Error) -> Error {
    log::error!("request failed: {}", e);
    Error::transport(e.to_string())
}

fn decode(e: gloo_net::Error) -> Error {
    log::error!("undecodable response body: {}", e);
    Error::transport(format!("invalid response body: {}", e))
}

async fn ok_or_status(resp: Response) -> Result<Response, Error> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        resp.status_text()
    } else {
        body
    };
    log::error!("HTTP {}: {}", status, message);
    Err(Error::Status { status, message })
}

impl<R: Record> ResourceClient for HttpResourceClient<R> {
    type Record = R;

    async fn fetch_all(&self) -> Result<Vec<R>, Error> {
        let url = api_url(&R::descriptor().retrieve_all_path());
        let resp = Request::get(&url).send().await.map_err(transport)?;
        let resp = ok_or_status(resp).await?;
        resp.json().await.map_err(decode)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<R, Error> {
        let url = api_url(&R::descriptor().retrieve_path(id));
        let resp = Request::get(&url).send().await.map_err(transport)?;
        if resp.status() == 404 {
            return Err(Error::NotFound);
        }
        let resp = ok_or_status(resp).await?;
        resp.json().await.map_err(decode)
    }

    async fn create(&self, payload: Value) -> Result<R, Error> {
        let url = api_url(&R::descriptor().add_path());
        let resp = Request::post(&url)
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let resp = ok_or_status(resp).await?;
        resp.json().await.map_err(decode)
    }

    async fn update(&self, payload: Value) -> Result<R, Error> {
        let url = api_url(&R::descriptor().modify_path());
        let resp = Request::put(&url)
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let resp = ok_or_status(resp).await?;
        resp.json().await.map_err(decode)
    }

    async fn remove(&self, id: i64) -> Result<(), Error> {
        let url = api_url(&R::descriptor().remove_path(id));
        let resp = Request::delete(&url).send().await.map_err(transport)?;
        ok_or_status(resp).await?;
        Ok(())
    }

    async fn cancel(&self, id: i64) -> Result<(), Error> {
        let url = api_url(&R::descriptor().cancel_path(id));
        let resp = Request::put(&url).send().await.map_err(transport)?;
        ok_or_status(resp).await?;
        Ok(())
    }

    async fn assign_relation(&self, first: i64, second: i64) -> Result<(), Error> {
        let d = R::descriptor();
        let path = d
            .assign_path(first, second)
            .ok_or_else(|| Error::validation(format!("{} have no relation endpoint", d.plural)))?;
        let resp = Request::put(&api_url(&path)).send().await.map_err(transport)?;
        ok_or_status(resp).await?;
        Ok(())
    }
}
