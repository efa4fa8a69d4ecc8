//! HTTP upload of the row order
//!
//! Used when a container carries `dragreorder-url` and no result sink was
//! supplied. The body is an [`OrderUpload`] posted as JSON:
//!
//! ```json
//! {"tableref": "tasks", "order": ["42", "17"]}
//! ```
//!
//! Any non-2xx response is a failure.

use dragreorder_core::{OrderUpload, SinkFailure, Submission, trace_log};
use gloo_net::http::Request;

use crate::csrf::csrf_header;

/// Posts submissions to a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSink {
	endpoint: String,
}

impl HttpSink {
	/// Creates a sink posting to `endpoint`.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}

	/// Posts the submission and waits for the response.
	pub async fn send(&self, submission: &Submission) -> Result<(), SinkFailure> {
		let upload = OrderUpload::from(submission);
		let mut request = Request::post(&self.endpoint);

		if let Some((header_name, header_value)) = csrf_header() {
			request = request.header(header_name, &header_value);
		}

		trace_log!("uploading {} to {}", submission.ticket, self.endpoint);
		let response = request
			.json(&upload)
			.map_err(|e| SinkFailure::new(format!("failed to create request: {}", e)))?
			.send()
			.await
			.map_err(|e| SinkFailure::new(format!("failed to send request: {}", e)))?;

		if !response.ok() {
			return Err(SinkFailure::with_status(
				response.status(),
				response.status_text(),
			));
		}
		Ok(())
	}
}
