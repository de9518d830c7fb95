//! Generic collection binding shared by the CRUD-shaped services.
//!
//! Users, teams, tags, webhooks, numbers and A2P campaign associations all
//! follow the same layout: `GET collection`, `GET collection/{id}`,
//! `POST collection`, `PUT collection/{id}` and `DELETE collection/{id}`.

use std::fmt::Display;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::paginated::{ListPage, PaginatedStream, PaginatedStreamBuilder};
use super::query::QueryValues;
use super::{ApiResponse, ClientInner, Response, NO_BODY};
use crate::Result;

/// One REST collection on top of the shared transport.
pub(crate) struct Resource<'a> {
    inner: &'a Arc<ClientInner>,
    collection: &'static str,
}

impl<'a> Resource<'a> {
    pub(crate) fn new(inner: &'a Arc<ClientInner>, collection: &'static str) -> Self {
        Self { inner, collection }
    }

    pub(crate) fn item_path(&self, id: impl Display) -> String {
        format!("{}/{}", self.collection, id)
    }

    pub(crate) async fn list<R: DeserializeOwned + Default>(
        &self,
        query: Option<&QueryValues>,
    ) -> Result<ApiResponse<R>> {
        self.inner.get_json(self.collection, query).await
    }

    pub(crate) fn stream<L: ListPage>(&self, query: Option<&QueryValues>) -> PaginatedStream<L::Item> {
        PaginatedStreamBuilder::new(self.inner.clone(), self.collection)
            .query(query)
            .build::<L>()
    }

    pub(crate) async fn get<R: DeserializeOwned + Default>(
        &self,
        id: impl Display,
    ) -> Result<ApiResponse<R>> {
        self.inner.get_json(&self.item_path(id), None).await
    }

    pub(crate) async fn create<R, B>(&self, body: &B) -> Result<ApiResponse<R>>
    where
        R: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.inner.post_json(self.collection, Some(body)).await
    }

    pub(crate) async fn update<R, B>(&self, id: impl Display, body: &B) -> Result<ApiResponse<R>>
    where
        R: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.inner.put_json(&self.item_path(id), Some(body)).await
    }

    pub(crate) async fn delete(&self, id: impl Display) -> Result<Response> {
        self.inner
            .send(Method::DELETE, &self.item_path(id), NO_BODY)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AircallClient, ClientConfig};

    #[test]
    fn test_item_path() {
        let client = AircallClient::with_config(ClientConfig::default()).unwrap();
        let resource = Resource::new(&client.inner, "webhooks");

        assert_eq!(resource.item_path(42), "webhooks/42");
        assert_eq!(resource.item_path("abc-def"), "webhooks/abc-def");
    }
}
