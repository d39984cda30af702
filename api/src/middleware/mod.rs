//! Middleware modules for the API server

pub mod request_context;

pub use request_context::{request_id, RequestContext, RequestId, REQUEST_ID_HEADER};
