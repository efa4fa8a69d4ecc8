//! Callback wrapper used for result sinks.
//!
//! ## Example
//!
//! ```
//! use dragreorder_core::{Callback, Order};
//!
//! let on_reorder = Callback::new(|order: Order| {
//!     println!("new order: {:?}", order);
//! });
//! on_reorder.call(Order::new(["2", "1"]));
//! ```

use std::fmt;
use std::rc::Rc;

/// A cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Rc`, so clones are cheap and all refer
/// to the same closure. Everything runs on the UI thread, so no `Send` or
/// `Sync` bound is required.
pub struct Callback<Args, Ret = ()> {
	inner: Rc<dyn Fn(Args) -> Ret + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
