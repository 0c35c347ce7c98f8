use super::ApiError;
use crate::{
    dto::input::{ApiErrorEnvelope, ApiResponse},
    error::Error,
    session::SessionStore,
};
use reqwest::{multipart::Form, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::{sync::Arc, time::Duration};

pub struct ApiClientConfig {
    ///
    /// Address of the backend without the `/v1` prefix
    ///
    pub base_url: String,
    pub timeout: Duration,
}

///
/// Thin wrapper around [reqwest::Client] that knows
/// backend envelopes and attaches the session token.
///
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, session: Arc<SessionStore>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Network)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    ///
    /// Builds path of a resource owned by the logged in association
    ///
    /// ### Errors
    /// - [Error::NotAuthenticated] when association id is not stored
    ///
    pub fn association_path(&self, suffix: &str) -> Result<String, Error> {
        let association_id = self
            .session
            .association_id()?
            .ok_or(Error::NotAuthenticated)?;

        Ok(format!("/v1/associations/{association_id}{suffix}"))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, Error> {
        let request = self.request(Method::GET, path)?.query(query);
        self.send(request).await
    }

    ///
    /// Same as [ApiClient::get] but `404` is not an error
    ///
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<ApiResponse<T>>, Error> {
        match self.get(path, query).await {
            Ok(response) => Ok(Some(response)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.send(request).await
    }

    ///
    /// POST without body, used by action style endpoints
    ///
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, Error> {
        let request = self.request(Method::POST, path)?;
        self.send(request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.send(request).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PATCH, path)?.json(body);
        self.send(request).await
    }

    ///
    /// PATCH without body, used by toggle style endpoints
    ///
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, Error> {
        let request = self.request(Method::PATCH, path)?;
        self.send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, Error> {
        let request = self.request(Method::DELETE, path)?;
        self.send(request).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<ApiResponse<T>, Error> {
        let request = self.request(Method::POST, path)?.multipart(form);
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        tracing::debug!(%method, path, "sending request");

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);
        if let Some(access_token) = self.session.access_token()? {
            request = request.bearer_auth(access_token);
        }

        Ok(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>, Error> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!(%err, "request did not reach the server");
            Error::Network(err)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::Network)?;

        if !status.is_success() {
            let envelope = serde_json::from_slice::<ApiErrorEnvelope>(&body).ok();
            let err = ApiError::new(status.as_u16(), envelope);
            tracing::debug!(status = status.as_u16(), code = ?err.code(), "request failed");

            return Err(Error::Api(err));
        }

        if body.is_empty() {
            return Ok(ApiResponse::empty());
        }

        let response = serde_json::from_slice::<ApiResponse<T>>(&body)?;

        Ok(response)
    }
}

impl<T> ApiResponse<T> {
    ///
    /// ### Errors
    /// - [Error::MissingData] when response had no data
    ///
    pub fn into_data(self) -> Result<T, Error> {
        self.data.ok_or(Error::MissingData)
    }
}
