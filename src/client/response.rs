use http::HeaderMap;

/// A decoded response together with its status code and headers.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded response body
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Borrow the decoded body
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Take the decoded body, dropping status and headers
    pub fn into_result(self) -> T {
        self.result
    }

    /// Look up a response header as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Transform the body, keeping status and headers
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> DetailedResponse<U> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: f(self.result),
        }
    }
}
