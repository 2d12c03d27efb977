//! XML response decoding.
//!
//! Success bodies decode into any caller-chosen [`DeserializeOwned`] shape through
//! `serde_path_to_error`, so a shape mismatch reports the element path that failed. Rejected
//! requests decode into an [`ErrorEnvelope`] with an event reader that keeps `Code`, `Message`,
//! and `RequestID` text exactly as received, surrounding whitespace included.

// crates.io
use quick_xml::{Reader, de::Deserializer, events::Event};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{DecodeError, ErrorEnvelope, ServiceError},
};

/// Repeated `<item>` children wrapped in a `*Set` element, as Query APIs encode lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSet<T> {
	/// Items in document order.
	#[serde(rename = "item", default = "Vec::new")]
	pub items: Vec<T>,
}
impl<T> Default for ItemSet<T> {
	fn default() -> Self {
		Self { items: Vec::new() }
	}
}
impl<T> IntoIterator for ItemSet<T> {
	type IntoIter = std::vec::IntoIter<T>;
	type Item = T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

/// Decodes an XML body into `T`.
///
/// The root element's name is not checked; its children map onto `T`'s fields.
pub fn decode<T>(body: &[u8]) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	let text = std::str::from_utf8(body)?;
	let mut de = Deserializer::from_str(text.trim_start());

	Ok(serde_path_to_error::deserialize(&mut de)?)
}

/// Decodes a rejection body into an [`ErrorEnvelope`].
///
/// Accepts both the `RequestID` and `RequestId` spellings. Element text is not trimmed.
pub fn decode_error_envelope(body: &[u8]) -> Result<ErrorEnvelope, DecodeError> {
	let text = std::str::from_utf8(body)?;
	let mut reader = Reader::from_str(text.trim_start());
	let mut path = Vec::<String>::new();
	let mut envelope = ErrorEnvelope::default();
	let mut current = None::<ServiceError>;
	let mut has_root = false;

	loop {
		match reader.read_event()? {
			Event::Start(e) => {
				has_root = true;

				path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());

				if is_error_element(&path) {
					current = Some(ServiceError::default());
				}
			},
			Event::Empty(e) => {
				has_root = true;

				path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());

				if is_error_element(&path) {
					envelope.errors.push(ServiceError::default());
				}

				path.pop();
			},
			Event::Text(e) => {
				if let Some(target) = text_target(&path, &mut envelope.request_id, current.as_mut())
				{
					target.push_str(&e.unescape()?);
				}
			},
			Event::CData(e) => {
				if let Some(target) = text_target(&path, &mut envelope.request_id, current.as_mut())
				{
					target.push_str(std::str::from_utf8(&e.into_inner())?);
				}
			},
			Event::End(_) => {
				if is_error_element(&path) {
					envelope.errors.extend(current.take());
				}

				path.pop();
			},
			Event::Eof => break,
			_ => {},
		}
	}

	if !has_root {
		return Err(DecodeError::MissingRoot);
	}
	if !path.is_empty() {
		return Err(DecodeError::Unterminated);
	}

	Ok(envelope)
}

fn is_error_element(path: &[String]) -> bool {
	matches!(path, [_, errors, error] if errors == "Errors" && error == "Error")
}

fn text_target<'a>(
	path: &[String],
	request_id: &'a mut String,
	current: Option<&'a mut ServiceError>,
) -> Option<&'a mut String> {
	match path {
		[_, leaf] if leaf == "RequestID" || leaf == "RequestId" => Some(request_id),
		[_, errors, error, leaf] if errors == "Errors" && error == "Error" => match leaf.as_str() {
			"Code" => current.map(|e| &mut e.code),
			"Message" => current.map(|e| &mut e.message),
			_ => None,
		},
		_ => None,
	}
}
