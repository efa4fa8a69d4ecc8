//! Buttons located in the document

use dragreorder_core::markup::button_selector;
use dragreorder_core::{Affordance, ButtonRole, Buttons, warn_log};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::describe_js_error;

/// An element acting as a save, cancel or conditional button.
///
/// Hiding sets an inline `display: none`; showing removes the inline value so
/// the page's own styling applies again.
#[derive(Debug, Clone)]
pub struct ElementButton {
	element: HtmlElement,
}

impl ElementButton {
	/// Wraps an element.
	pub fn new(element: HtmlElement) -> Self {
		Self { element }
	}

	/// The underlying element.
	pub fn element(&self) -> &HtmlElement {
		&self.element
	}
}

impl Affordance for ElementButton {
	fn set_visible(&mut self, visible: bool) {
		let style = self.element.style();
		let result = if visible {
			style.remove_property("display").map(|_| ())
		} else {
			style.set_property("display", "none")
		};
		if let Err(err) = result {
			warn_log!("failed to toggle button: {}", describe_js_error(&err));
		}
	}

	fn set_enabled(&mut self, enabled: bool) {
		let result = if enabled {
			self.element.remove_attribute("disabled")
		} else {
			self.element.set_attribute("disabled", "")
		};
		if let Err(err) = result {
			warn_log!("failed to toggle button state: {}", describe_js_error(&err));
		}
	}
}

/// Locates the buttons sharing the container's reference token.
///
/// Without a reference there are no buttons.
pub fn locate_buttons(document: &Document, reference: Option<&str>) -> Buttons<ElementButton> {
	let Some(reference) = reference else {
		return Buttons::new();
	};

	let first = |role: ButtonRole| {
		document
			.query_selector(&button_selector(reference, role))
			.ok()
			.flatten()
			.and_then(|element| element.dyn_into::<HtmlElement>().ok())
			.map(ElementButton::new)
	};

	let mut buttons = Buttons::new();
	buttons.save = first(ButtonRole::Save);
	buttons.cancel = first(ButtonRole::Cancel);

	if let Ok(list) = document.query_selector_all(&button_selector(reference, ButtonRole::Conditional))
	{
		buttons.conditional = (0..list.length())
			.filter_map(|index| list.item(index))
			.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
			.map(ElementButton::new)
			.collect();
	}
	buttons
}
