//! `<tr>` elements of a container as a [`RowList`]

use dragreorder_core::markup::ROW_ID_ATTR;
use dragreorder_core::{RowList, warn_log};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::describe_js_error;

/// The rows of one container, read live from the document.
#[derive(Debug, Clone)]
pub struct TableRows {
	container: Element,
}

impl TableRows {
	/// Wraps a container element.
	pub fn new(container: Element) -> Self {
		Self { container }
	}
}

impl RowList for TableRows {
	type Row = Element;

	fn rows(&self) -> Vec<Element> {
		let Ok(list) = self.container.query_selector_all("tr") else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|index| list.item(index))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn row_id(&self, row: &Element) -> Option<String> {
		row.get_attribute(ROW_ID_ATTR)
	}

	fn move_before(&mut self, row: &Element, anchor: &Element) {
		if row == anchor {
			return;
		}
		if let Err(err) = anchor.before_with_node_1(row) {
			warn_log!("failed to move row: {}", describe_js_error(&err));
		}
	}

	fn move_after(&mut self, row: &Element, anchor: &Element) {
		if row == anchor {
			return;
		}
		if let Err(err) = anchor.after_with_node_1(row) {
			warn_log!("failed to move row: {}", describe_js_error(&err));
		}
	}

	fn set_draggable(&mut self, row: &Element) {
		if let Err(err) = row.set_attribute("draggable", "true") {
			warn_log!("failed to mark row draggable: {}", describe_js_error(&err));
		}
	}

	fn set_class(&mut self, row: &Element, class: &str, on: bool) {
		let classes = row.class_list();
		let result = if on {
			classes.add_1(class)
		} else {
			classes.remove_1(class)
		};
		if let Err(err) = result {
			warn_log!("failed to toggle class `{}`: {}", class, describe_js_error(&err));
		}
	}
}
