// self
use crate::_prelude::*;

/// Longest body prefix included in response trace events.
pub const BODY_PREVIEW_LIMIT: usize = 512;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the action and target host.
	pub fn new(action: &str, host: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("aws_query.call", action, host);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (action, host);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `trace` event with the response status and a bounded, lossy body preview.
pub fn trace_response(status: u16, body: &[u8]) {
	#[cfg(feature = "tracing")]
	{
		let preview = body_preview(body);

		tracing::trace!(status, len = body.len(), body = %preview, "received response");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (status, body);
	}
}

/// Returns at most [`BODY_PREVIEW_LIMIT`] bytes of `body` as text.
pub fn body_preview(body: &[u8]) -> String {
	let end = body.len().min(BODY_PREVIEW_LIMIT);

	String::from_utf8_lossy(&body[..end]).into_owned()
}
