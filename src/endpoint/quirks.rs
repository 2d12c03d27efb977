/// Endpoint-specific quirks that influence how requests are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointQuirks {
	/// Appends `; charset=utf-8` to the form content type. SimpleDB fails signature checks
	/// without it; EC2 accepts either form.
	pub utf8_charset: bool,
}
impl Default for EndpointQuirks {
	fn default() -> Self {
		Self { utf8_charset: true }
	}
}
