//! Submissions to the result sink
//!
//! The controller never calls a sink itself. Operations that want the order
//! delivered return a [`Submission`]; whoever drives the controller delivers
//! it (synchronously through an [`OrderSink`], or asynchronously over HTTP)
//! and reports the outcome with
//! [`ReorderController::complete`](crate::ReorderController::complete).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::error::SinkFailure;
use crate::order::Order;

/// Identifies one submission of one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

impl fmt::Display for Ticket {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// An order waiting to be delivered to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
	/// Pass back to `complete` with the outcome.
	pub ticket: Ticket,
	/// The container's reference token.
	pub reference: Option<String>,
	/// The order to store.
	pub order: Order,
}

/// JSON body of the order upload.
///
/// ```
/// use dragreorder_core::{Order, OrderUpload};
///
/// let upload = OrderUpload {
///     tableref: Some("tasks".to_string()),
///     order: Order::new(["42", "17"]),
/// };
/// assert_eq!(
///     serde_json::to_string(&upload).unwrap(),
///     r#"{"tableref":"tasks","order":["42","17"]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpload {
	/// The container's reference token.
	pub tableref: Option<String>,
	/// Row identifiers, top to bottom.
	pub order: Order,
}

impl From<&Submission> for OrderUpload {
	fn from(submission: &Submission) -> Self {
		Self {
			tableref: submission.reference.clone(),
			order: submission.order.clone(),
		}
	}
}

/// A sink that acknowledges before returning.
pub trait OrderSink {
	/// Stores the submitted order.
	fn deliver(&self, submission: &Submission) -> Result<(), SinkFailure>;
}

impl OrderSink for Callback<Order, Result<(), SinkFailure>> {
	fn deliver(&self, submission: &Submission) -> Result<(), SinkFailure> {
		self.call(submission.order.clone())
	}
}

impl OrderSink for Callback<Order, ()> {
	fn deliver(&self, submission: &Submission) -> Result<(), SinkFailure> {
		self.call(submission.order.clone());
		Ok(())
	}
}
