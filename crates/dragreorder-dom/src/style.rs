//! The document as a [`StyleHost`]

use dragreorder_core::{StyleHost, warn_log};
use web_sys::Document;

use crate::describe_js_error;

/// Injects `<style>` elements into a document's head.
#[derive(Debug, Clone)]
pub struct DocumentStyles {
	document: Document,
}

impl DocumentStyles {
	/// Wraps a document.
	pub fn new(document: Document) -> Self {
		Self { document }
	}
}

impl StyleHost for DocumentStyles {
	fn contains(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn append(&mut self, id: &str, css: &str) {
		let style = match self.document.create_element("style") {
			Ok(style) => style,
			Err(err) => {
				warn_log!("failed to create stylesheet: {}", describe_js_error(&err));
				return;
			}
		};
		style.set_id(id);
		style.set_text_content(Some(css));

		let appended = match self.document.head() {
			Some(head) => head.append_child(&style),
			None => match self.document.document_element() {
				Some(root) => root.append_child(&style),
				None => return,
			},
		};
		if let Err(err) = appended {
			warn_log!("failed to inject stylesheet: {}", describe_js_error(&err));
		}
	}
}
