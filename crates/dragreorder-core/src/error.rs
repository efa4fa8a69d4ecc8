//! Error types for row reordering.

use std::fmt;

use thiserror::Error;

/// The container or its markup cannot be wired up.
///
/// Construction aborts and no listeners are attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
	/// No element matched the given container selector.
	#[error("container not found: {0}")]
	ContainerNotFound(String),

	/// The value passed as the container is not a DOM element.
	#[error("provided container must be an element")]
	NotAnElement,

	/// A draggable row carries no identifier.
	#[error("draggable row {index} has no `dragreorder-id` attribute")]
	MissingRowId {
		/// Position among the draggable rows.
		index: usize,
	},

	/// Two draggable rows carry the same identifier.
	#[error("row identifier `{0}` is used by more than one row")]
	DuplicateRowId(String),

	/// The settings object could not be parsed.
	#[error("invalid settings: {0}")]
	InvalidSettings(String),

	/// An event listener could not be registered.
	#[error("failed to attach `{event}` listener: {reason}")]
	Listener {
		/// The DOM event name.
		event: String,
		/// Reason reported by the browser.
		reason: String,
	},
}

/// A value passed to a setter was rejected; the previous value is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// The dragged-row class name is empty after trimming.
	#[error("dragged-row class name cannot be empty")]
	EmptyClassName,
}

/// The result sink refused or failed to store a submitted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkFailure {
	/// HTTP status, when the sink is an upload.
	pub status: Option<u16>,
	/// Human readable reason.
	pub message: String,
}

impl SinkFailure {
	/// Creates a failure without a status code.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			status: None,
			message: message.into(),
		}
	}

	/// Creates a failure for an HTTP response.
	pub fn with_status(status: u16, message: impl Into<String>) -> Self {
		Self {
			status: Some(status),
			message: message.into(),
		}
	}
}

impl fmt::Display for SinkFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.status {
			Some(status) => write!(f, "saving the row order failed ({}): {}", status, self.message),
			None => write!(f, "saving the row order failed: {}", self.message),
		}
	}
}

impl std::error::Error for SinkFailure {}

/// Any error surfaced by the reorder widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
	/// See [`ConfigurationError`].
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),
	/// See [`ValidationError`].
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// See [`SinkFailure`].
	#[error(transparent)]
	Sink(#[from] SinkFailure),
}
