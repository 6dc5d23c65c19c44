use crate::errors::{ValidationDetail, WatsonError, WatsonResult};
use crate::transport::http_transport::{HttpRequest, RequestBody};
use crate::transport::multipart::MultipartForm;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use url::Url;

/// Assembles an [`HttpRequest`] from a base URL and a path template such as
/// `/v1/classifiers/{classifier_id}`.
pub struct RequestBuilder {
    method: Method,
    base_url: Url,
    path: String,
    path_params: Vec<(String, String)>,
    query_params: Vec<(String, String)>,
    headers: HeaderMap,
    body: RequestBody,
    operation: Option<String>,
}

impl RequestBuilder {
    /// Start a request for `path`, resolved against `base_url`
    pub fn new(method: Method, base_url: Url, path: impl Into<String>) -> Self {
        Self {
            method,
            base_url,
            path: path.into(),
            path_params: Vec::new(),
            query_params: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            operation: None,
        }
    }

    /// Name of the API operation, used for logging
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Operation name set with [`RequestBuilder::operation`]
    pub fn operation_id(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Value for a `{name}` placeholder in the path template
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Adds the parameter only when a value is present
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v.to_string()),
            None => self,
        }
    }

    /// Adds a comma-joined list when present
    pub fn query_list(self, key: impl Into<String>, values: Option<&[String]>) -> Self {
        match values {
            Some(list) => self.query(key, list.join(",")),
            None => self,
        }
    }

    /// Sets a header, replacing any previous value
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> WatsonResult<Self> {
        let header_name = HeaderName::from_str(name.as_ref()).map_err(|e| {
            WatsonError::validation(
                format!("Invalid header name '{}'", name.as_ref()),
                vec![ValidationDetail::new("header_name", e.to_string())],
            )
        })?;

        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| {
            WatsonError::validation(
                format!("Invalid value for header '{}'", name.as_ref()),
                vec![ValidationDetail::new("header_value", e.to_string())],
            )
        })?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Sets a header only when a value is present
    pub fn header_opt(self, name: impl AsRef<str>, value: Option<&str>) -> WatsonResult<Self> {
        match value {
            Some(v) => self.header(name, v),
            None => Ok(self),
        }
    }

    /// Adds caller-supplied headers; these replace any header of the same name
    pub fn headers(mut self, headers: &BTreeMap<String, String>) -> WatsonResult<Self> {
        for (name, value) in headers {
            self = self.header(name, value)?;
        }
        Ok(self)
    }

    /// Copies already-parsed headers, replacing existing values
    pub fn header_map(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// JSON body; sets `Content-Type: application/json`
    pub fn json<T: Serialize>(mut self, body: &T) -> WatsonResult<Self> {
        let bytes = serde_json::to_vec(body)?;
        self.body = RequestBody::Bytes(Bytes::from(bytes));
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }

    /// Raw body with an explicit content type, e.g. `text/plain`
    pub fn text(mut self, body: impl Into<String>, content_type: &str) -> WatsonResult<Self> {
        self = self.header(CONTENT_TYPE.as_str(), content_type)?;
        self.body = RequestBody::Bytes(Bytes::from(body.into()));
        Ok(self)
    }

    /// multipart/form-data body
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unresolved path template
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Headers set so far
    pub fn headers_ref(&self) -> &HeaderMap {
        &self.headers
    }

    /// Resolve the path template against the base URL and append the query
    pub fn build_url(&self) -> WatsonResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                WatsonError::configuration(format!(
                    "Base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty();

            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                match placeholder(segment) {
                    Some(name) => segments.push(self.path_value(name)?),
                    None => segments.push(segment),
                };
            }
        }

        if !self.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.query_params
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }

        Ok(url)
    }

    /// Finish the request
    pub fn build(self) -> WatsonResult<HttpRequest> {
        let url = self.build_url()?;
        Ok(HttpRequest {
            method: self.method,
            url,
            headers: self.headers,
            body: self.body,
        })
    }

    fn path_value(&self, name: &str) -> WatsonResult<&str> {
        let value = self
            .path_params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| {
                WatsonError::validation(
                    format!("Missing path parameter '{}'", name),
                    vec![ValidationDetail::new(name, "path parameter is required")],
                )
            })?;

        if value.is_empty() {
            return Err(WatsonError::validation(
                format!("Path parameter '{}' must not be empty", name),
                vec![ValidationDetail::new(name, "path parameter must not be empty")],
            ));
        }
        // URL normalization would drop these segments
        if value == "." || value == ".." {
            return Err(WatsonError::validation(
                format!("Path parameter '{}' must not be '{}'", name, value),
                vec![ValidationDetail::new(name, "path parameter must not be a dot segment")],
            ));
        }
        Ok(value)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
}
