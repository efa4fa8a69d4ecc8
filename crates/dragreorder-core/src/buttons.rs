//! Save, cancel and conditional buttons
//!
//! Visibility follows whether the current order equals the baseline:
//!
//! | order | conditional buttons | save / cancel |
//! |-------|---------------------|---------------|
//! | unchanged | shown | hidden |
//! | changed | hidden | shown |
//!
//! Each column only applies when the matching [`Settings`] flag is set;
//! otherwise those buttons are left alone.

use std::cell::Cell;
use std::rc::Rc;

use crate::settings::Settings;

/// A button the controller can show, hide, enable and disable.
pub trait Affordance {
	/// Shows or hides the button.
	fn set_visible(&mut self, visible: bool);

	/// Enables or disables the button.
	fn set_enabled(&mut self, enabled: bool);
}

/// The buttons located for one container. Any of them may be absent.
#[derive(Debug, Clone)]
pub struct Buttons<A> {
	/// Sends the order to the sink.
	pub save: Option<A>,
	/// Reverts to the baseline.
	pub cancel: Option<A>,
	/// Only usable while the order is unchanged.
	pub conditional: Vec<A>,
}

impl<A> Default for Buttons<A> {
	fn default() -> Self {
		Self {
			save: None,
			cancel: None,
			conditional: Vec::new(),
		}
	}
}

impl<A: Affordance> Buttons<A> {
	/// Creates an empty set of buttons.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the save button.
	pub fn with_save(mut self, button: A) -> Self {
		self.save = Some(button);
		self
	}

	/// Sets the cancel button.
	pub fn with_cancel(mut self, button: A) -> Self {
		self.cancel = Some(button);
		self
	}

	/// Adds a conditional button.
	pub fn with_conditional(mut self, button: A) -> Self {
		self.conditional.push(button);
		self
	}

	/// Applies the visibility rule for the given comparison result.
	pub fn apply(&mut self, is_equal: bool, settings: &Settings) {
		if settings.hide_conditional_buttons {
			for button in &mut self.conditional {
				button.set_visible(is_equal);
			}
		}
		if settings.hide_save_cancel_buttons {
			for button in self.save.iter_mut().chain(self.cancel.iter_mut()) {
				button.set_visible(!is_equal);
			}
		}
	}

	/// Disables save and cancel while a submission is outstanding.
	pub fn set_busy(&mut self, busy: bool) {
		for button in self.save.iter_mut().chain(self.cancel.iter_mut()) {
			button.set_enabled(!busy);
		}
	}
}

/// Observable state of a [`MemoryButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
	/// Whether the button is displayed.
	pub visible: bool,
	/// Whether the button accepts clicks.
	pub enabled: bool,
}

impl Default for ButtonState {
	fn default() -> Self {
		Self {
			visible: true,
			enabled: true,
		}
	}
}

/// Headless button; clones share state so tests can keep a handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryButton {
	state: Rc<Cell<ButtonState>>,
}

impl MemoryButton {
	/// Creates a visible, enabled button.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current state.
	pub fn state(&self) -> ButtonState {
		self.state.get()
	}

	/// Whether the button is displayed.
	pub fn is_visible(&self) -> bool {
		self.state.get().visible
	}

	/// Whether the button accepts clicks.
	pub fn is_enabled(&self) -> bool {
		self.state.get().enabled
	}
}

impl Affordance for MemoryButton {
	fn set_visible(&mut self, visible: bool) {
		let mut state = self.state.get();
		state.visible = visible;
		self.state.set(state);
	}

	fn set_enabled(&mut self, enabled: bool) {
		let mut state = self.state.get();
		state.enabled = enabled;
		self.state.set(state);
	}
}
