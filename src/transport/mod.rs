//! HTTP transport layer: request assembly, multipart bodies and the reqwest transport.

mod http_transport;
mod multipart;
mod request_builder;

pub use http_transport::{HttpRequest, HttpTransport, ReqwestTransport, RequestBody, TransportResponse};
pub use multipart::{FileData, FormPart, MultipartForm, PartData, OCTET_STREAM};
pub use request_builder::RequestBuilder;
