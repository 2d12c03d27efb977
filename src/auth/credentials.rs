//! Validated access key pairs, built explicitly or read from the process environment.

// std
use std::env;
// self
use crate::{_prelude::*, auth::SecretKey};

/// Environment variable holding the access key identifier.
pub const ACCESS_KEY_ID_ENV: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const SECRET_ACCESS_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";

/// Error returned when credential validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialsError {
	/// A credential field was empty.
	#[error("{field} cannot be empty.")]
	Empty {
		/// Which field failed validation.
		field: &'static str,
	},
	/// The access key identifier contains whitespace.
	#[error("Access key identifier contains whitespace.")]
	ContainsWhitespace,
	/// A required environment variable is unset or not valid Unicode.
	#[error("Environment variable `{var}` is not set.")]
	MissingEnv {
		/// Variable name.
		var: &'static str,
	},
}

/// Access key pair used to sign every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	access_key_id: String,
	secret_key: SecretKey,
}
impl Credentials {
	/// Validates and wraps an access key pair.
	pub fn new(
		access_key_id: impl Into<String>,
		secret_key: impl Into<String>,
	) -> Result<Self, CredentialsError> {
		let access_key_id = access_key_id.into();
		let secret_key = SecretKey::new(secret_key);

		if access_key_id.is_empty() {
			return Err(CredentialsError::Empty { field: "Access key identifier" });
		}
		if access_key_id.chars().any(char::is_whitespace) {
			return Err(CredentialsError::ContainsWhitespace);
		}
		if secret_key.is_empty() {
			return Err(CredentialsError::Empty { field: "Secret access key" });
		}

		Ok(Self { access_key_id, secret_key })
	}

	/// Reads [`ACCESS_KEY_ID_ENV`] and [`SECRET_ACCESS_KEY_ENV`] from the environment.
	pub fn from_env() -> Result<Self, CredentialsError> {
		Self::from_lookup(|var| env::var(var).ok())
	}

	/// Builds credentials from an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let access_key_id = lookup(ACCESS_KEY_ID_ENV)
			.ok_or(CredentialsError::MissingEnv { var: ACCESS_KEY_ID_ENV })?;
		let secret_key = lookup(SECRET_ACCESS_KEY_ENV)
			.ok_or(CredentialsError::MissingEnv { var: SECRET_ACCESS_KEY_ENV })?;

		Self::new(access_key_id, secret_key)
	}

	/// Access key identifier sent as `AWSAccessKeyId`.
	pub fn access_key_id(&self) -> &str {
		&self.access_key_id
	}

	/// Secret key used as the HMAC key.
	pub fn secret_key(&self) -> &SecretKey {
		&self.secret_key
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("access_key_id", &self.access_key_id)
			.field("secret_key", &self.secret_key)
			.finish()
	}
}
