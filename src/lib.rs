//! Minimal signed Query API client for EC2-style endpoints: canonical Signature Version 2
//! request signing over HTTPS with typed XML responses.
//!
//! A call clones the client's template [`request::Request`], adds an `Action` plus caller
//! parameters, signs the sorted parameter set with HMAC-SHA256, POSTs the form body to
//! `https://{host}/`, and decodes the XML reply either into the caller's shape or into an
//! [`error::ErrorEnvelope`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod ec2;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod obs;
pub mod query;
pub mod request;
pub mod xml;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, parking_lot as _, tokio as _};
