//! Markup contract
//!
//! Attribute names read from the page and the parsing rules for their values.
//!
//! ```html
//! <table dragreorder="true" dragreorder-ref="tasks" dragreorder-rowskip="1"
//!        dragreorder-action="button" dragreorder-url="/tasks/order">
//!   <tr><th>Task</th></tr>
//!   <tr dragreorder-id="17"><td>Write docs</td></tr>
//!   <tr dragreorder-id="42"><td>Ship it</td></tr>
//! </table>
//! <button dragreorder-ref="tasks" dragreorder-action="save">Save</button>
//! <button dragreorder-ref="tasks" dragreorder-action="cancel">Cancel</button>
//! <a dragreorder-ref="tasks" dragreorder-action="conditional" href="/export">Export</a>
//! ```

/// Marks a container for automatic attachment (`"true"`).
pub const ENABLE_ATTR: &str = "dragreorder";
/// Reference token shared by a container and its buttons.
pub const REFERENCE_ATTR: &str = "dragreorder-ref";
/// Number of rows to exclude from the top of the container.
pub const ROW_SKIP_ATTR: &str = "dragreorder-rowskip";
/// Action mode on containers, button role on buttons.
pub const ACTION_ATTR: &str = "dragreorder-action";
/// Upload endpoint used when no result sink is supplied.
pub const UPLOAD_URL_ATTR: &str = "dragreorder-url";
/// Stable identifier of a row.
pub const ROW_ID_ATTR: &str = "dragreorder-id";

/// Selector matching every container marked for automatic attachment.
pub const CONTAINER_SELECTOR: &str = "[dragreorder=\"true\"]";

/// When the result sink receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMode {
	/// Only when the save button is clicked.
	Button,
	/// At the end of every drag.
	Instant,
	/// At the end of every drag and on save.
	Both,
	/// Never; only button visibility is maintained.
	#[default]
	Passive,
}

impl ActionMode {
	/// Parses the container's action attribute.
	///
	/// Unrecognized and absent values yield [`ActionMode::Passive`].
	pub fn parse(value: Option<&str>) -> Self {
		match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
			Some("button") => Self::Button,
			Some("instant") => Self::Instant,
			Some("both") => Self::Both,
			_ => Self::Passive,
		}
	}

	/// Whether the sink is invoked when a drag ends.
	///
	/// The save button submits in every mode; the mode only governs drag ends.
	pub fn sends_on_drag_end(&self) -> bool {
		matches!(self, Self::Instant | Self::Both)
	}
}

/// What a control button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
	/// Sends the current order to the sink.
	Save,
	/// Reverts to the baseline order.
	Cancel,
	/// Only available while the order is unchanged.
	Conditional,
}

impl ButtonRole {
	/// Parses a button's action attribute.
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"save" => Some(Self::Save),
			"cancel" => Some(Self::Cancel),
			"conditional" => Some(Self::Conditional),
			_ => None,
		}
	}

	/// The attribute value for this role.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Save => "save",
			Self::Cancel => "cancel",
			Self::Conditional => "conditional",
		}
	}
}

/// Everything the controller reads from the container element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerConfig {
	/// Reference token linking the container to its buttons.
	pub reference: Option<String>,
	/// Rows excluded from the top.
	pub row_skip: usize,
	/// When the sink is invoked.
	pub mode: ActionMode,
	/// Endpoint for the HTTP upload sink.
	pub upload_url: Option<String>,
}

impl ContainerConfig {
	/// Reads the configuration through an attribute lookup.
	///
	/// ```
	/// use dragreorder_core::{ActionMode, ContainerConfig};
	///
	/// let config = ContainerConfig::from_attributes(|name| match name {
	///     "dragreorder-ref" => Some("tasks".to_string()),
	///     "dragreorder-rowskip" => Some("2".to_string()),
	///     "dragreorder-action" => Some("instant".to_string()),
	///     _ => None,
	/// });
	/// assert_eq!(config.reference.as_deref(), Some("tasks"));
	/// assert_eq!(config.row_skip, 2);
	/// assert_eq!(config.mode, ActionMode::Instant);
	/// ```
	pub fn from_attributes<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		Self {
			reference: lookup(REFERENCE_ATTR).filter(|r| !r.trim().is_empty()),
			row_skip: lookup(ROW_SKIP_ATTR)
				.map(|v| parse_row_skip(&v))
				.unwrap_or(0),
			mode: ActionMode::parse(lookup(ACTION_ATTR).as_deref()),
			upload_url: lookup(UPLOAD_URL_ATTR).filter(|u| !u.trim().is_empty()),
		}
	}

	/// Sets the reference token.
	pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
		self.reference = Some(reference.into());
		self
	}

	/// Sets the number of excluded top rows.
	pub fn with_row_skip(mut self, row_skip: usize) -> Self {
		self.row_skip = row_skip;
		self
	}

	/// Sets the action mode.
	pub fn with_mode(mut self, mode: ActionMode) -> Self {
		self.mode = mode;
		self
	}
}

/// Parses the row-skip attribute; anything but a non-negative integer is 0.
pub fn parse_row_skip(value: &str) -> usize {
	value.trim().parse().unwrap_or(0)
}

/// Builds the selector locating a container's buttons of one role.
///
/// ```
/// use dragreorder_core::ButtonRole;
/// use dragreorder_core::markup::button_selector;
///
/// assert_eq!(
///     button_selector("tasks", ButtonRole::Save),
///     r#"[dragreorder-ref="tasks"][dragreorder-action="save"]"#
/// );
/// ```
pub fn button_selector(reference: &str, role: ButtonRole) -> String {
	format!(
		"[{}=\"{}\"][{}=\"{}\"]",
		REFERENCE_ATTR,
		escape_attribute_value(reference),
		ACTION_ATTR,
		role.as_str()
	)
}

fn escape_attribute_value(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for ch in value.chars() {
		if matches!(ch, '"' | '\\') {
			escaped.push('\\');
		}
		escaped.push(ch);
	}
	escaped
}
