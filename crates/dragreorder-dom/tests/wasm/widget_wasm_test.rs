//! Browser tests for the DOM binding
//!
//! Run with `wasm-pack test --chrome --headless crates/dragreorder-dom`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use dragreorder_core::{Callback, ConfigurationError, Order, STYLE_ELEMENT_ID, Settings, SinkFailure};
use dragreorder_dom::bindings::JsDragReorder;
use dragreorder_dom::{DragReorder, DragReorderOptions, ResultSink};
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Mounts a table with a header row and rows `A`, `B`, `C`, plus save,
/// cancel and conditional buttons sharing `reference`.
fn mount(reference: &str, action: &str) -> Element {
	let document = document();
	let host = document.create_element("div").unwrap();
	host.set_inner_html(&format!(
		r#"<table id="{reference}" dragreorder="true" dragreorder-ref="{reference}"
		          dragreorder-rowskip="1" dragreorder-action="{action}">
			<tr><th>Letter</th></tr>
			<tr dragreorder-id="A"><td>A</td></tr>
			<tr dragreorder-id="B"><td>B</td></tr>
			<tr dragreorder-id="C"><td>C</td></tr>
		</table>
		<button dragreorder-ref="{reference}" dragreorder-action="save">Save</button>
		<button dragreorder-ref="{reference}" dragreorder-action="cancel">Cancel</button>
		<a dragreorder-ref="{reference}" dragreorder-action="conditional">Export</a>"#
	));
	document.body().unwrap().append_child(&host).unwrap();
	document.get_element_by_id(reference).unwrap()
}

fn row(table: &Element, id: &str) -> Element {
	table
		.query_selector(&format!("tr[dragreorder-id=\"{id}\"]"))
		.unwrap()
		.unwrap()
}

fn button(reference: &str, role: &str) -> HtmlElement {
	document()
		.query_selector(&format!(
			"[dragreorder-ref=\"{reference}\"][dragreorder-action=\"{role}\"]"
		))
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap()
}

fn is_hidden(element: &HtmlElement) -> bool {
	element.style().get_property_value("display").unwrap() == "none"
}

fn fire(target: &Element, event: &str) {
	let event = Event::new(event).unwrap();
	target.dispatch_event(&event).unwrap();
}

fn drag(table: &Element, dragged: &str, over: &[&str]) {
	let dragged = row(table, dragged);
	fire(&dragged, "dragstart");
	for id in over {
		fire(&row(table, id), "dragover");
	}
	fire(&dragged, "dragend");
}

/// Replaces `window.alert` so failures can be read back instead of blocking.
fn capture_alerts() {
	let window: JsValue = web_sys::window().unwrap().into();
	Reflect::set(&window, &"__dragreorderAlerts".into(), &Array::new()).unwrap();
	let recorder =
		Function::new_with_args("message", "window.__dragreorderAlerts.push(String(message));");
	Reflect::set(&window, &"alert".into(), &recorder).unwrap();
}

fn alerts() -> Vec<String> {
	let window: JsValue = web_sys::window().unwrap().into();
	let alerts: Array = Reflect::get(&window, &"__dragreorderAlerts".into())
		.unwrap()
		.dyn_into()
		.unwrap();
	alerts.iter().filter_map(|message| message.as_string()).collect()
}

/// Resolves after pending promise reactions have run.
async fn next_tick() {
	let tick = Promise::new(&mut |resolve, _reject| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
			.unwrap();
	});
	wasm_bindgen_futures::JsFuture::from(tick).await.unwrap();
}

fn assert_failed_save_kept_changes(widget: &DragReorder, reference: &str) {
	assert_eq!(widget.baseline().as_slice(), ["A", "B", "C"]);
	assert_eq!(widget.order().as_slice(), ["C", "A", "B"]);
	assert!(widget.is_changed());
	assert!(!widget.is_pending());
	let save = button(reference, "save");
	assert!(!is_hidden(&save));
	assert!(!save.has_attribute("disabled"));
	assert!(!is_hidden(&button(reference, "cancel")));
}

fn recording_sink() -> (ResultSink, Rc<RefCell<Vec<Order>>>) {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let sink = ResultSink::Callback(Callback::new({
		let calls = Rc::clone(&calls);
		move |order: Order| -> Result<(), SinkFailure> {
			calls.borrow_mut().push(order);
			Ok(())
		}
	}));
	(sink, calls)
}

#[wasm_bindgen_test]
fn test_attach_marks_rows_below_skip_draggable() {
	let table = mount("marks", "button");
	DragReorder::attach(table.clone(), DragReorderOptions::new()).unwrap();

	let header = table.query_selector("tr").unwrap().unwrap();
	assert_eq!(header.get_attribute("draggable"), None);
	for id in ["A", "B", "C"] {
		assert_eq!(row(&table, id).get_attribute("draggable").as_deref(), Some("true"));
	}
}

#[wasm_bindgen_test]
fn test_initial_button_visibility() {
	let table = mount("initial", "button");
	DragReorder::attach(table, DragReorderOptions::new()).unwrap();

	assert!(is_hidden(&button("initial", "save")));
	assert!(is_hidden(&button("initial", "cancel")));
	assert!(!is_hidden(&button("initial", "conditional")));
}

#[wasm_bindgen_test]
fn test_drag_reorders_rows_and_toggles_buttons() {
	let table = mount("reorder", "button");
	let widget = DragReorder::attach(table.clone(), DragReorderOptions::new()).unwrap();

	drag(&table, "C", &["A"]);

	assert_eq!(widget.order().as_slice(), ["C", "A", "B"]);
	assert!(widget.is_changed());
	assert!(!is_hidden(&button("reorder", "save")));
	assert!(!is_hidden(&button("reorder", "cancel")));
	assert!(is_hidden(&button("reorder", "conditional")));
	assert!(!row(&table, "C").class_list().contains(&widget.dragged_class()));
}

#[wasm_bindgen_test]
fn test_save_click_delivers_and_resets_baseline() {
	let table = mount("save", "button");
	let (sink, calls) = recording_sink();
	let widget =
		DragReorder::attach(table.clone(), DragReorderOptions::new().with_sink(sink)).unwrap();

	drag(&table, "B", &["A"]);
	assert!(calls.borrow().is_empty());

	button("save", "save").click();

	assert_eq!(calls.borrow().len(), 1);
	assert_eq!(calls.borrow()[0].as_slice(), ["B", "A", "C"]);
	assert_eq!(widget.baseline().as_slice(), ["B", "A", "C"]);
	assert!(is_hidden(&button("save", "save")));
}

#[wasm_bindgen_test]
fn test_cancel_click_restores_baseline() {
	let table = mount("cancel", "button");
	let widget = DragReorder::attach(table.clone(), DragReorderOptions::new()).unwrap();

	drag(&table, "A", &["B", "C"]);
	assert_eq!(widget.order().as_slice(), ["B", "C", "A"]);

	button("cancel", "cancel").click();

	assert_eq!(widget.order().as_slice(), ["A", "B", "C"]);
	assert!(!widget.is_changed());
	assert!(is_hidden(&button("cancel", "cancel")));
}

#[wasm_bindgen_test]
fn test_instant_mode_calls_js_function_at_drag_end() {
	let table = mount("instant", "instant");
	let callback = js_sys::Function::new_with_args(
		"order",
		"window.__dragreorderLast = order.join(','); return true;",
	);
	let widget =
		DragReorder::attach(table.clone(), DragReorderOptions::new().with_sink(callback)).unwrap();

	drag(&table, "C", &["B"]);

	let window: JsValue = web_sys::window().unwrap().into();
	let last = js_sys::Reflect::get(&window, &"__dragreorderLast".into()).unwrap();
	assert_eq!(last.as_string().as_deref(), Some("A,C,B"));
	assert_eq!(widget.baseline().as_slice(), ["A", "C", "B"]);
}

#[wasm_bindgen_test]
fn test_foreign_drag_does_not_move_rows() {
	let left = mount("left", "button");
	let right = mount("right", "button");
	let left_widget = DragReorder::attach(left.clone(), DragReorderOptions::new()).unwrap();
	let right_widget = DragReorder::attach(right.clone(), DragReorderOptions::new()).unwrap();

	let dragged = row(&left, "A");
	fire(&dragged, "dragstart");
	fire(&row(&right, "C"), "dragover");
	fire(&dragged, "dragend");

	assert_eq!(left_widget.order().as_slice(), ["A", "B", "C"]);
	assert_eq!(right_widget.order().as_slice(), ["A", "B", "C"]);
}

#[wasm_bindgen_test]
fn test_stylesheet_injected_once() {
	let first = mount("style-one", "button");
	let second = mount("style-two", "button");
	DragReorder::attach(first, DragReorderOptions::new()).unwrap();
	DragReorder::attach(second, DragReorderOptions::new()).unwrap();

	let styles = document()
		.query_selector_all(&format!("style#{}", STYLE_ELEMENT_ID))
		.unwrap();
	assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn test_empty_class_name_is_rejected() {
	let table = mount("class", "button");
	let widget = DragReorder::attach(table, DragReorderOptions::new()).unwrap();

	widget.set_dragged_class("lifted").unwrap();
	assert!(widget.set_dragged_class("  ").is_err());
	assert_eq!(widget.dragged_class(), "lifted");
}

#[wasm_bindgen_test]
fn test_missing_container_is_reported() {
	let result = DragReorder::from_selector("#does-not-exist", DragReorderOptions::new());
	assert_eq!(
		result.unwrap_err(),
		ConfigurationError::ContainerNotFound("#does-not-exist".to_string())
	);
}

#[wasm_bindgen_test]
fn test_settings_keep_save_button_visible() {
	let table = mount("settings", "button");
	let settings = Settings::default().with_hide_save_cancel_buttons(false);
	DragReorder::attach(table, DragReorderOptions::new().with_settings(settings)).unwrap();

	assert!(!is_hidden(&button("settings", "save")));
}

#[wasm_bindgen_test]
fn test_js_function_returning_false_keeps_changes() {
	capture_alerts();
	let table = mount("refuse", "button");
	let callback = Function::new_with_args("order", "return false;");
	let widget =
		DragReorder::attach(table.clone(), DragReorderOptions::new().with_sink(callback)).unwrap();

	drag(&table, "C", &["A"]);
	button("refuse", "save").click();

	assert_failed_save_kept_changes(&widget, "refuse");
	assert_eq!(alerts().len(), 1);
}

#[wasm_bindgen_test]
fn test_throwing_js_function_keeps_changes() {
	capture_alerts();
	let table = mount("throwing", "button");
	let callback = Function::new_with_args("order", "throw new Error('read-only');");
	let widget =
		DragReorder::attach(table.clone(), DragReorderOptions::new().with_sink(callback)).unwrap();

	drag(&table, "C", &["A"]);
	button("throwing", "save").click();

	assert_failed_save_kept_changes(&widget, "throwing");
	let alerts = alerts();
	assert_eq!(alerts.len(), 1);
	assert!(alerts[0].contains("read-only"));
}

#[wasm_bindgen_test]
async fn test_rejected_promise_keeps_changes() {
	capture_alerts();
	let table = mount("offline", "button");
	let callback = Function::new_with_args("order", "return Promise.reject(new Error('offline'));");
	let widget =
		DragReorder::attach(table.clone(), DragReorderOptions::new().with_sink(callback)).unwrap();

	drag(&table, "C", &["A"]);
	button("offline", "save").click();

	assert!(widget.is_pending());
	assert!(button("offline", "save").has_attribute("disabled"));

	next_tick().await;

	assert_failed_save_kept_changes(&widget, "offline");
	let alerts = alerts();
	assert_eq!(alerts.len(), 1);
	assert!(alerts[0].contains("offline"));
}

#[wasm_bindgen_test]
async fn test_promise_resolving_false_keeps_changes() {
	capture_alerts();
	let table = mount("declined", "button");
	let callback = Function::new_with_args("order", "return Promise.resolve(false);");
	let widget =
		DragReorder::attach(table.clone(), DragReorderOptions::new().with_sink(callback)).unwrap();

	drag(&table, "C", &["A"]);
	button("declined", "save").click();
	next_tick().await;

	assert_failed_save_kept_changes(&widget, "declined");
	assert_eq!(alerts().len(), 1);
}

#[wasm_bindgen_test]
fn test_js_constructor_logs_non_element_table() {
	let console: JsValue = Reflect::get(&js_sys::global(), &"console".into()).unwrap();
	let original = Reflect::get(&console, &"error".into()).unwrap();
	let window: JsValue = web_sys::window().unwrap().into();
	Reflect::set(&window, &"__dragreorderErrors".into(), &Array::new()).unwrap();
	let recorder =
		Function::new_with_args("message", "window.__dragreorderErrors.push(String(message));");
	Reflect::set(&console, &"error".into(), &recorder).unwrap();

	let result = JsDragReorder::new(JsValue::from_f64(1.0), JsValue::UNDEFINED, None);

	Reflect::set(&console, &"error".into(), &original).unwrap();
	assert!(result.is_err());
	let errors: Array = Reflect::get(&window, &"__dragreorderErrors".into())
		.unwrap()
		.dyn_into()
		.unwrap();
	let expected = ConfigurationError::NotAnElement.to_string();
	assert!(errors.iter().any(|message| message.as_string().as_deref() == Some(expected.as_str())));
}

#[wasm_bindgen_test]
fn test_attach_all_applies_shared_settings() {
	let table = mount("attach-all", "button");
	let settings = Settings::default().with_hide_save_cancel_buttons(false);

	let attached = dragreorder_dom::attach_all(settings);

	assert!(attached.iter().any(|widget| widget.container() == &table));
	assert!(!is_hidden(&button("attach-all", "save")));
	assert!(!is_hidden(&button("attach-all", "cancel")));
}
