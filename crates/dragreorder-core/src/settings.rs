//! Behaviour toggles supplied by the page author.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Button visibility settings.
///
/// Deserializes from the JS-style names (`hideConditionalButtons`,
/// `hideSaveCancelButtons`) as well as the older snake-case ones
/// (`hide_conditional`, `hide_savecancel`). Missing keys keep their default
/// and unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Hide conditional buttons while the order differs from the baseline.
	#[serde(
		rename = "hideConditionalButtons",
		alias = "hide_conditional",
		alias = "hide_conditional_buttons"
	)]
	pub hide_conditional_buttons: bool,

	/// Hide save and cancel buttons while the order equals the baseline.
	#[serde(
		rename = "hideSaveCancelButtons",
		alias = "hide_savecancel",
		alias = "hide_save_cancel_buttons"
	)]
	pub hide_save_cancel_buttons: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			hide_conditional_buttons: true,
			hide_save_cancel_buttons: true,
		}
	}
}

impl Settings {
	/// Parses settings from a JSON object; `null` yields the defaults.
	///
	/// ```
	/// use dragreorder_core::Settings;
	///
	/// let settings = Settings::from_json(r#"{"hide_savecancel": false}"#).unwrap();
	/// assert!(settings.hide_conditional_buttons);
	/// assert!(!settings.hide_save_cancel_buttons);
	/// ```
	pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
		let settings: Option<Self> = serde_json::from_str(json)
			.map_err(|err| ConfigurationError::InvalidSettings(err.to_string()))?;
		Ok(settings.unwrap_or_default())
	}

	/// Sets whether conditional buttons are hidden while the order is changed.
	pub fn with_hide_conditional_buttons(mut self, hide: bool) -> Self {
		self.hide_conditional_buttons = hide;
		self
	}

	/// Sets whether save/cancel buttons are hidden while the order is unchanged.
	pub fn with_hide_save_cancel_buttons(mut self, hide: bool) -> Self {
		self.hide_save_cancel_buttons = hide;
		self
	}
}
