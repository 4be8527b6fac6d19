//! Edge functions for a static site behind a CDN.
//!
//! - [`cdn_rules::default_index`] sends requests for paths without a
//!   file extension to `/index.html`.
//! - [`cdn_rules::web_security`] sets a fixed set of security headers
//!   on every response.
//!
//! Both work on the typed invocation envelope in [`cdn_event`], and
//! the Compute@Edge entry point applies them to live traffic.

pub mod cdn_config;
pub mod cdn_event;
pub mod cdn_rules;
pub mod logging;
