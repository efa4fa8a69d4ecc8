//! Result sinks available in the browser

use dragreorder_core::{Callback, Order, OrderSink, SinkFailure, Submission};
use js_sys::{Array, Function, Promise};
use wasm_bindgen::{JsCast, JsValue};

use crate::describe_js_error;
use crate::upload::HttpSink;

/// Where submitted orders go.
#[derive(Debug, Clone, Default)]
pub enum ResultSink {
	/// Nowhere; every submission is acknowledged immediately.
	#[default]
	None,
	/// A Rust callback answering synchronously.
	Callback(Callback<Order, Result<(), SinkFailure>>),
	/// A JavaScript function called with the array of identifiers.
	///
	/// Throwing or returning `false` is a failure. A returned promise is
	/// awaited; rejecting it or resolving to `false` is a failure.
	Function(Function),
	/// An HTTP upload.
	Http(HttpSink),
}

/// How the outcome of a delivery becomes known.
pub(crate) enum Delivery {
	Settled(Result<(), SinkFailure>),
	Promise(Promise),
	Upload(HttpSink),
}

impl ResultSink {
	pub(crate) fn deliver(&self, submission: &Submission) -> Delivery {
		match self {
			Self::None => Delivery::Settled(Ok(())),
			Self::Callback(callback) => Delivery::Settled(callback.deliver(submission)),
			Self::Function(function) => {
				let ids: Array = submission.order.iter().map(JsValue::from).collect();
				match function.call1(&JsValue::NULL, &ids) {
					Ok(value) => match value.dyn_into::<Promise>() {
						Ok(promise) => Delivery::Promise(promise),
						Err(value) => Delivery::Settled(settle(Ok(value))),
					},
					Err(err) => Delivery::Settled(settle(Err(err))),
				}
			}
			Self::Http(http) => Delivery::Upload(http.clone()),
		}
	}
}

impl From<Function> for ResultSink {
	fn from(function: Function) -> Self {
		Self::Function(function)
	}
}

impl From<HttpSink> for ResultSink {
	fn from(http: HttpSink) -> Self {
		Self::Http(http)
	}
}

/// Interprets what a JavaScript sink returned or threw.
pub(crate) fn settle(result: Result<JsValue, JsValue>) -> Result<(), SinkFailure> {
	match result {
		Ok(value) if value.as_bool() == Some(false) => {
			Err(SinkFailure::new("the result callback rejected the order"))
		}
		Ok(_) => Ok(()),
		Err(err) => Err(SinkFailure::new(describe_js_error(&err))),
	}
}
