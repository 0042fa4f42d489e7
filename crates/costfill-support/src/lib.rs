//! Historical CUR backfill requests filed as AWS Support cases.
//!
//! The entry point is [`handle`]: one invocation opens at most one support case asking AWS to
//! backfill a CUR 2.0 export, and maps the outcome to an HTTP-style [`HandlerResponse`].
//!
//! [`HandlerResponse`]: costfill_model::HandlerResponse
mod api;
pub use api::SupportApi;

#[cfg(feature = "aws")]
mod aws;
#[cfg(feature = "aws")]
pub use aws::AwsSupport;

mod case;
pub use case::CaseRequest;

mod config;
pub use config::RequesterConfig;

mod error;
pub use error::{ConfigError, ProviderError, SupportCallError};

mod handler;
pub use handler::{InvocationContext, handle, is_access_denial};
