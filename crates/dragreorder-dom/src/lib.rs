//! Dragreorder DOM - browser binding for table row reordering
//!
//! Connects [`dragreorder_core::ReorderController`] to real `<table>` elements
//! through `web-sys`:
//!
//! - [`rows`]: `<tr>` elements as a [`RowList`](dragreorder_core::RowList)
//! - [`buttons`]: save / cancel / conditional buttons located by reference
//! - [`style`]: stylesheet injection into the document head
//! - [`sink`]: Rust callbacks, JavaScript functions and HTTP uploads as result sinks
//! - [`upload`]: the JSON upload with CSRF header
//! - [`widget`]: [`DragReorder`], event listeners and delivery
//! - [`bindings`]: the `DragReorder` JavaScript class
//!
//! Everything except [`csrf`] cookie parsing is only compiled for `wasm32`.
//!
//! ## Example
//!
//! ```ignore
//! use dragreorder_core::{Callback, Order, Settings};
//! use dragreorder_dom::{DragReorder, DragReorderOptions, ResultSink};
//!
//! let sink = ResultSink::Callback(Callback::new(|order: Order| {
//!     web_sys::console::log_1(&format!("{:?}", order).into());
//!     Ok(())
//! }));
//! let widget = DragReorder::from_selector(
//!     "#tasks",
//!     DragReorderOptions::new()
//!         .with_settings(Settings::default())
//!         .with_sink(sink),
//! )?;
//! ```

#![warn(missing_docs)]

pub mod csrf;

#[cfg(target_arch = "wasm32")]
pub mod bindings;
#[cfg(target_arch = "wasm32")]
pub mod buttons;
#[cfg(target_arch = "wasm32")]
pub mod rows;
#[cfg(target_arch = "wasm32")]
pub mod sink;
#[cfg(target_arch = "wasm32")]
pub mod style;
#[cfg(target_arch = "wasm32")]
pub mod upload;
#[cfg(target_arch = "wasm32")]
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub use buttons::ElementButton;
#[cfg(target_arch = "wasm32")]
pub use rows::TableRows;
#[cfg(target_arch = "wasm32")]
pub use sink::ResultSink;
#[cfg(target_arch = "wasm32")]
pub use style::DocumentStyles;
#[cfg(target_arch = "wasm32")]
pub use upload::HttpSink;
#[cfg(target_arch = "wasm32")]
pub use widget::{DragReorder, DragReorderOptions, attach_all, page_session};

/// Best-effort text of a thrown JavaScript value.
#[cfg(target_arch = "wasm32")]
pub(crate) fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
	use wasm_bindgen::JsCast;

	if let Some(text) = value.as_string() {
		return text;
	}
	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	format!("{:?}", value)
}
