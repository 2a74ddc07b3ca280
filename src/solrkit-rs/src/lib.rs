//! SolrKit Client Library
//!
//! HTTP client for talking to a Solr core over its JSON API.

mod client;

pub use client::Client;
pub use solrkit_core::codec;
pub use solrkit_core::{ConnectionConfig, Error, HttpTransport, Method, Result, Transport};
