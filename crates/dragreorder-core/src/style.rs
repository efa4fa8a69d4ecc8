//! Shared stylesheet
//!
//! One `<style>` block per document gives draggable rows a grab cursor and a
//! drag-handle icon and dims the row being dragged. It is injected by the
//! first controller and skipped by every later one.

use crate::markup::ENABLE_ATTR;

/// `id` of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "dragtosort_css";

const HANDLE_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' %3E%3Cpath d='M11 18c0 1.1-.9 2-2 2s-2-.9-2-2 .9-2 2-2 2 .9 2 2zm-2-8c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm0-6c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm6 4c1.1 0 2-.9 2-2s-.9-2-2-2-2 .9-2 2 .9 2 2 2zm0 2c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm0 6c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z'%3E%3C/path%3E%3C/svg%3E";

/// Where stylesheets are injected.
pub trait StyleHost {
	/// Whether an element with `id` already exists.
	fn contains(&self, id: &str) -> bool;

	/// Appends a `<style id="{id}">` element holding `css`.
	fn append(&mut self, id: &str, css: &str);
}

/// Returns the stylesheet for the given dragged-row class.
pub fn stylesheet(dragged_class: &str) -> String {
	format!(
		r#"
/* Cursor change and icon on the left hand side */
table[{attr}=true] tr[draggable=true] {{
	cursor: grab;
	background-position: 0.2em center;
	background-repeat: no-repeat;
	background-size: 1.2em 1.2em;
	background-image: url("{icon}");
}}
/* Extra padding-left to move text away from the icon */
table[{attr}=true] > tbody > tr > td:first-child {{
	padding-left: 1.5em;
}}
/* Row being dragged */
table[{attr}=true] tr.{class} {{
	opacity: 0.2;
}}
"#,
		attr = ENABLE_ATTR,
		icon = HANDLE_ICON,
		class = dragged_class,
	)
}

/// Injects the stylesheet unless the host already has it.
///
/// Returns whether anything was injected.
pub fn ensure_styles<H: StyleHost + ?Sized>(host: &mut H, dragged_class: &str) -> bool {
	if host.contains(STYLE_ELEMENT_ID) {
		return false;
	}
	host.append(STYLE_ELEMENT_ID, &stylesheet(dragged_class));
	true
}
