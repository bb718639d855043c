// self
use crate::{_prelude::*, obs::ActionKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedAction<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedAction<F> = F;

/// A span builder used by client actions.
#[derive(Clone, Debug)]
pub struct ActionSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ActionSpan {
	/// Creates a new span tagged with the provided action kind + stage.
	pub fn new(kind: ActionKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("ssms_client.action", action = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedAction<Fut>
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

	/// Emits a `warn` event for a failed action inside this span.
	pub fn failed(&self, error: &Error) {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(|| tracing::warn!(error = %error, "action failed"));
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = error;
		}
	}
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
	// std
	use std::io::{self, Write};
	// crates.io
	use parking_lot::Mutex;
	// self
	use super::*;

	#[derive(Clone, Default)]
	struct Capture(Arc<Mutex<Vec<u8>>>);
	impl Capture {
		fn contents(&self) -> String {
			String::from_utf8_lossy(&self.0.lock()).into_owned()
		}
	}
	impl Write for Capture {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().extend_from_slice(buf);

			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	fn capturing_subscriber(capture: &Capture) -> impl 'static + tracing::Subscriber + Send + Sync {
		let writer = capture.clone();

		tracing_subscriber::fmt().with_ansi(false).with_writer(move || writer.clone()).finish()
	}

	#[test]
	fn failed_warns_inside_the_action_span() {
		let capture = Capture::default();

		tracing::subscriber::with_default(capturing_subscriber(&capture), || {
			ActionSpan::new(ActionKind::Login, "exchange").failed(&Error::NotAuthenticated);
		});

		let output = capture.contents();

		assert!(output.contains("WARN"));
		assert!(output.contains("ssms_client.action"));
		assert!(output.contains("\"login\""));
		assert!(output.contains("\"exchange\""));
		assert!(output.contains("action failed"));
		assert!(output.contains("No session token is stored"));
	}

	#[test]
	fn instrumented_futures_run_inside_the_action_span() {
		let capture = Capture::default();
		let runtime = tokio::runtime::Builder::new_current_thread()
			.build()
			.expect("Current-thread runtime should build.");
		let span_name = tracing::subscriber::with_default(capturing_subscriber(&capture), || {
			let span = ActionSpan::new(ActionKind::ListProducts, "fetch");

			runtime.block_on(span.instrument(async {
				tracing::Span::current().metadata().map(|metadata| metadata.name())
			}))
		});

		assert_eq!(span_name, Some("ssms_client.action"));
	}
}
