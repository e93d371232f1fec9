//! HTTP module
//!
//! Client, middleware and query-string handling for the Strapi REST API.
//!
//! # Features
//!
//! - **Bearer Auth**: Token injected on every outbound request
//! - **Status Classification**: 401/403, 404 and 5xx become typed errors
//! - **Query Params**: Ordered, override-on-collision parameter lists

mod client;
pub mod middleware;
mod query;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, HttpResponse, RequestConfig};
pub use query::{QueryParams, PAGE_SIZE_KEY, SORT_KEY};

#[cfg(test)]
mod tests;
