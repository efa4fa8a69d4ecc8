//! JavaScript API
//!
//! ```js
//! import init, { DragReorder, attachAll } from "./dragreorder_dom.js";
//!
//! await init();
//! const table = document.querySelector("#tasks");
//! const widget = new DragReorder(table, { hideConditionalButtons: false }, (order) => {
//!     console.log("new order", order);
//! });
//! widget.className = "lifted";
//! widget.revertOrdering();
//! console.log(widget.getOrder());
//! ```

use dragreorder_core::{ConfigurationError, Settings, error_log};
use js_sys::{Array, Function};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::describe_js_error;
use crate::sink::ResultSink;
use crate::widget::{self, DragReorder, DragReorderOptions};

/// `DragReorder` as seen from JavaScript.
#[wasm_bindgen(js_name = DragReorder)]
pub struct JsDragReorder {
	widget: DragReorder,
}

#[wasm_bindgen(js_class = DragReorder)]
impl JsDragReorder {
	/// `new DragReorder(table, settings?, callback?)`
	///
	/// `table` is an element or a selector. Without a callback the order is
	/// uploaded to the table's `dragreorder-url`, if any.
	#[wasm_bindgen(constructor)]
	pub fn new(
		table: JsValue,
		settings: JsValue,
		callback: Option<Function>,
	) -> Result<JsDragReorder, JsError> {
		let mut options = DragReorderOptions::new().with_settings(parse_settings(&settings)?);
		if let Some(callback) = callback {
			options = options.with_sink(ResultSink::Function(callback));
		}

		let widget = match table.as_string() {
			Some(selector) => DragReorder::from_selector(&selector, options)?,
			None => {
				let container = table.dyn_into::<Element>().map_err(|_| {
					error_log!("{}", ConfigurationError::NotAnElement);
					ConfigurationError::NotAnElement
				})?;
				DragReorder::attach(container, options)?
			}
		};
		Ok(Self { widget })
	}

	/// Identifiers of the draggable rows, top to bottom.
	#[wasm_bindgen(js_name = getOrder)]
	pub fn get_order(&self) -> Array {
		self.widget.order().iter().map(JsValue::from).collect()
	}

	/// Whether the order differs from the last saved one.
	#[wasm_bindgen(getter, js_name = isChanged)]
	pub fn is_changed(&self) -> bool {
		self.widget.is_changed()
	}

	/// Restores the last saved order.
	#[wasm_bindgen(js_name = revertOrdering)]
	pub fn revert_ordering(&self) {
		self.widget.revert_ordering();
	}

	/// Class applied to the row being dragged.
	#[wasm_bindgen(getter, js_name = className)]
	pub fn class_name(&self) -> String {
		self.widget.dragged_class()
	}

	/// Empty names are rejected and the current class is kept.
	#[wasm_bindgen(setter, js_name = className)]
	pub fn set_class_name(&self, name: &str) {
		let _ = self.widget.set_dragged_class(name);
	}
}

/// Attaches to every `[dragreorder="true"]` table of the page.
///
/// Returns the number of tables attached.
#[wasm_bindgen(js_name = attachAll)]
pub fn attach_all(settings: JsValue) -> Result<u32, JsError> {
	let settings = parse_settings(&settings)?;
	let attached = widget::attach_all(settings);
	Ok(u32::try_from(attached.len()).unwrap_or(u32::MAX))
}

fn parse_settings(value: &JsValue) -> Result<Settings, ConfigurationError> {
	if value.is_undefined() || value.is_null() {
		return Ok(Settings::default());
	}
	js_sys::JSON::stringify(value)
		.map_err(|err| ConfigurationError::InvalidSettings(describe_js_error(&err)))
		.and_then(|json| Settings::from_json(&String::from(json)))
		.inspect_err(|err| error_log!("{}", err))
}
