//! Wiring a [`ReorderController`] to a live container
//!
//! [`DragReorder::attach`] reads the container's markup, locates its buttons,
//! injects the shared stylesheet and registers the event listeners:
//!
//! | Target | Event | Action |
//! |--------|-------|--------|
//! | each draggable row | `dragstart` | [`ReorderController::drag_start`] |
//! | each draggable row | `dragover` | `preventDefault()`, [`ReorderController::drag_over`] |
//! | each draggable row | `dragend` | [`ReorderController::drag_end`], then delivery |
//! | save button | `click` | [`ReorderController::save`], then delivery |
//! | cancel button | `click` | [`ReorderController::cancel`], then delivery |
//!
//! Listeners live as long as the page. The controller is borrowed for the
//! duration of one event and never across an await.

use std::cell::RefCell;
use std::rc::Rc;

use dragreorder_core::markup::CONTAINER_SELECTOR;
use dragreorder_core::{
	ConfigurationError, ContainerConfig, DragSession, Order, ReorderController, ReorderError,
	Settings, SinkFailure, Submission, Ticket, ValidationError, ensure_styles, error_log,
	info_log, trace_log,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, Element, Event, EventTarget};

use crate::buttons::{ElementButton, locate_buttons};
use crate::describe_js_error;
use crate::rows::TableRows;
use crate::sink::{Delivery, ResultSink, settle};
use crate::style::DocumentStyles;
use crate::upload::HttpSink;

type Controller = ReorderController<TableRows, ElementButton>;

thread_local! {
	static PAGE_SESSION: DragSession = DragSession::new();
}

/// The drag session shared by every widget attached without an explicit one.
pub fn page_session() -> DragSession {
	PAGE_SESSION.with(DragSession::clone)
}

/// Options for [`DragReorder::attach`].
#[derive(Debug, Clone, Default)]
pub struct DragReorderOptions {
	/// Button visibility toggles.
	pub settings: Settings,
	/// Where orders go. Defaults to an upload to the container's
	/// `dragreorder-url`, or nowhere.
	pub sink: Option<ResultSink>,
	/// Drag session to join. Defaults to [`page_session`].
	pub session: Option<DragSession>,
}

impl DragReorderOptions {
	/// Creates default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the button visibility toggles.
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	/// Sets the result sink.
	pub fn with_sink(mut self, sink: impl Into<ResultSink>) -> Self {
		self.sink = Some(sink.into());
		self
	}

	/// Joins the given drag session.
	pub fn with_session(mut self, session: DragSession) -> Self {
		self.session = Some(session);
		self
	}
}

#[derive(Debug)]
struct Inner {
	controller: Controller,
	sink: ResultSink,
}

/// Drag-and-drop reordering attached to one container element.
///
/// Cloning yields another handle to the same widget.
#[derive(Debug, Clone)]
pub struct DragReorder {
	inner: Rc<RefCell<Inner>>,
	container: Element,
}

impl DragReorder {
	/// Attaches to `container`.
	///
	/// On error nothing is attached and the error is logged.
	pub fn attach(
		container: Element,
		options: DragReorderOptions,
	) -> Result<Self, ConfigurationError> {
		Self::try_attach(container, options).inspect_err(|err| error_log!("{}", err))
	}

	fn try_attach(
		container: Element,
		options: DragReorderOptions,
	) -> Result<Self, ConfigurationError> {
		let document = container
			.owner_document()
			.ok_or(ConfigurationError::NotAnElement)?;
		let config = ContainerConfig::from_attributes(|name| container.get_attribute(name));

		let buttons = locate_buttons(&document, config.reference.as_deref());
		let save = buttons.save.as_ref().map(|b| b.element().clone());
		let cancel = buttons.cancel.as_ref().map(|b| b.element().clone());

		let sink = match (options.sink, &config.upload_url) {
			(Some(sink), _) => sink,
			(None, Some(url)) => ResultSink::Http(HttpSink::new(url.clone())),
			(None, None) => ResultSink::None,
		};
		let session = options.session.unwrap_or_else(page_session);

		let controller = ReorderController::new(
			TableRows::new(container.clone()),
			config,
			options.settings,
			buttons,
		)?;
		ensure_styles(
			&mut DocumentStyles::new(document),
			controller.dragged_class(),
		);
		let rows = controller.draggable_rows();

		let widget = Self {
			inner: Rc::new(RefCell::new(Inner { controller, sink })),
			container,
		};
		for row in rows {
			widget.listen_row(&row, &session)?;
		}
		if let Some(save) = save {
			widget.listen_button(&save, Controller::save)?;
		}
		if let Some(cancel) = cancel {
			widget.listen_button(&cancel, Controller::cancel)?;
		}

		info_log!("attached to {}", widget.inner.borrow().controller.id());
		Ok(widget)
	}

	/// Attaches to the first element matching `selector`.
	pub fn from_selector(
		selector: &str,
		options: DragReorderOptions,
	) -> Result<Self, ConfigurationError> {
		let container = web_sys::window()
			.and_then(|window| window.document())
			.and_then(|document| document.query_selector(selector).ok().flatten())
			.ok_or_else(|| ConfigurationError::ContainerNotFound(selector.to_string()));
		match container {
			Ok(container) => Self::attach(container, options),
			Err(err) => {
				error_log!("{}", err);
				Err(err)
			}
		}
	}

	fn listen_row(&self, row: &Element, session: &DragSession) -> Result<(), ConfigurationError> {
		listen(row, "dragstart", {
			let inner = Rc::clone(&self.inner);
			let session = session.clone();
			let row = row.clone();
			move |event: Event| {
				// Firefox only starts a drag when data is set.
				if let Some(transfer) = event
					.dyn_ref::<DragEvent>()
					.and_then(DragEvent::data_transfer)
				{
					let _ = transfer.set_data("text/plain", "");
				}
				inner.borrow_mut().controller.drag_start(&session, &row);
			}
		})?;

		listen(row, "dragover", {
			let inner = Rc::clone(&self.inner);
			let session = session.clone();
			let row = row.clone();
			move |event: Event| {
				event.prevent_default();
				inner.borrow_mut().controller.drag_over(&session, &row);
			}
		})?;

		listen(row, "dragend", {
			let inner = Rc::clone(&self.inner);
			let session = session.clone();
			move |_event: Event| {
				let submission = inner.borrow_mut().controller.drag_end(&session);
				dispatch(&inner, submission);
			}
		})
	}

	fn listen_button(
		&self,
		button: &Element,
		action: fn(&mut Controller) -> Option<Submission>,
	) -> Result<(), ConfigurationError> {
		let inner = Rc::clone(&self.inner);
		listen(button, "click", move |_event: Event| {
			let submission = action(&mut inner.borrow_mut().controller);
			dispatch(&inner, submission);
		})
	}

	/// The container element.
	pub fn container(&self) -> &Element {
		&self.container
	}

	/// Identifiers of the draggable rows in current order.
	pub fn order(&self) -> Order {
		self.inner.borrow().controller.order()
	}

	/// The order last acknowledged by the sink.
	pub fn baseline(&self) -> Order {
		self.inner.borrow().controller.baseline().clone()
	}

	/// Whether the current order differs from the baseline.
	pub fn is_changed(&self) -> bool {
		self.inner.borrow().controller.is_changed()
	}

	/// Whether a submission is waiting for the sink.
	pub fn is_pending(&self) -> bool {
		self.inner.borrow().controller.is_pending()
	}

	/// Restores the baseline order, delivering it in instant mode.
	pub fn revert_ordering(&self) {
		let submission = self.inner.borrow_mut().controller.revert_ordering();
		dispatch(&self.inner, submission);
	}

	/// Class applied to the row being dragged.
	pub fn dragged_class(&self) -> String {
		self.inner.borrow().controller.dragged_class().to_string()
	}

	/// Replaces the dragged-row class.
	pub fn set_dragged_class(&self, name: &str) -> Result<(), ValidationError> {
		self.inner.borrow_mut().controller.set_dragged_class(name)
	}
}

/// Attaches to every `[dragreorder="true"]` container of the page.
///
/// Containers that fail to attach are logged and skipped.
pub fn attach_all(settings: Settings) -> Vec<DragReorder> {
	let Some(document) = web_sys::window().and_then(|window| window.document()) else {
		return Vec::new();
	};
	let Ok(list) = document.query_selector_all(CONTAINER_SELECTOR) else {
		return Vec::new();
	};

	(0..list.length())
		.filter_map(|index| list.item(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.filter_map(|container| {
			let options = DragReorderOptions::new().with_settings(settings);
			DragReorder::attach(container, options).ok()
		})
		.collect()
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ConfigurationError>
where
	F: FnMut(Event) + 'static,
{
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	target
		.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.map_err(|err| ConfigurationError::Listener {
			event: event.to_string(),
			reason: describe_js_error(&err),
		})?;
	closure.forget();
	Ok(())
}

/// Hands a submission to the sink and acknowledges it once the outcome is
/// known.
fn dispatch(inner: &Rc<RefCell<Inner>>, submission: Option<Submission>) {
	let Some(submission) = submission else {
		return;
	};
	let ticket = submission.ticket;
	let sink = inner.borrow().sink.clone();

	match sink.deliver(&submission) {
		Delivery::Settled(outcome) => finish(inner, ticket, outcome),
		Delivery::Promise(promise) => {
			let inner = Rc::clone(inner);
			wasm_bindgen_futures::spawn_local(async move {
				let outcome = settle(JsFuture::from(promise).await);
				finish(&inner, ticket, outcome);
			});
		}
		Delivery::Upload(http) => {
			let inner = Rc::clone(inner);
			wasm_bindgen_futures::spawn_local(async move {
				let outcome = http.send(&submission).await;
				finish(&inner, ticket, outcome);
			});
		}
	}
}

fn finish(inner: &Rc<RefCell<Inner>>, ticket: Ticket, outcome: Result<(), SinkFailure>) {
	trace_log!("submission {} settled", ticket);
	let result = inner.borrow_mut().controller.complete(ticket, outcome);
	if let Err(ReorderError::Sink(failure)) = result {
		notify(&failure);
	}
}

fn notify(failure: &SinkFailure) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(&failure.to_string());
	}
}
