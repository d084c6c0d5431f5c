// self
use crate::_prelude::*;

/// A span builder used by signing entry points.
#[derive(Clone, Debug)]
pub struct SignSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SignSpan {
	/// Creates a new span tagged with the provided stage and HTTP method.
	pub fn new(stage: &'static str, method: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth1_header.sign", stage, method);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, method);

			Self {}
		}
	}

	/// Enters the span for the rest of the signing call.
	pub fn entered(self) -> SignSpanGuard {
		#[cfg(feature = "tracing")]
		{
			SignSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			SignSpanGuard {}
		}
	}
}

/// RAII guard returned by [`SignSpan::entered`].
pub struct SignSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for SignSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SignSpanGuard(..)")
	}
}

/// Logs a signing failure without touching credential material.
pub fn log_sign_failure(error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(error = %error, "failed to sign request");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sign_span_noop_without_tracing() {
		let _guard = SignSpan::new("test", "GET").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}

	#[test]
	fn failure_logging_accepts_any_error() {
		log_sign_failure(&Error::MalformedQuery { segment: "foo".into() });
	}
}
