//! Shared HTTP plumbing for Singleton services: the response envelope, the
//! common error type, request-id middleware and tracing setup.

pub mod error;
pub mod middleware;
pub mod response;
pub mod tracing;
