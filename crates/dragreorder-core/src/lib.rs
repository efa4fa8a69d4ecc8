//! Dragreorder Core - drag-and-drop row reordering state machine
//!
//! This crate holds everything about table row reordering that does not need a
//! browser: the drag lifecycle, order comparison, button visibility rules,
//! baseline revert and the submission/acknowledgment protocol with the result
//! sink. The DOM is reached only through the [`RowList`] and [`Affordance`]
//! traits, so the whole state machine runs natively in tests via
//! [`MemoryRows`] and [`MemoryButton`].
//!
//! ## Architecture
//!
//! - [`controller`]: [`ReorderController`], the per-table state machine
//! - [`rows`]: the ordered row abstraction and its in-memory implementation
//! - [`buttons`]: save / cancel / conditional button visibility
//! - [`session`]: [`DragSession`], the shared "which table started the drag" context
//! - [`markup`]: attribute names and parsing of the container markup
//! - [`settings`]: user-facing behaviour toggles
//! - [`sink`]: submissions, acknowledgments and synchronous sinks
//! - [`style`]: the shared stylesheet and at-most-once injection
//! - [`logging`]: console / tracing logging macros
//!
//! ## Example
//!
//! ```
//! use dragreorder_core::{
//!     Buttons, ContainerConfig, DragSession, MemoryButton, MemoryRows, ReorderController,
//!     Settings,
//! };
//!
//! let rows = MemoryRows::new(["a", "b", "c"]);
//! let buttons: Buttons<MemoryButton> = Buttons::new();
//! let mut controller =
//!     ReorderController::new(rows, ContainerConfig::default(), Settings::default(), buttons)
//!         .unwrap();
//!
//! let session = DragSession::new();
//! let c = controller.rows().find("c").unwrap();
//! let a = controller.rows().find("a").unwrap();
//!
//! controller.drag_start(&session, &c);
//! controller.drag_over(&session, &a);
//! let submission = controller.drag_end(&session);
//!
//! assert!(submission.is_none());
//! assert_eq!(controller.order().as_slice(), ["c", "a", "b"]);
//! assert!(controller.is_changed());
//! ```

#![warn(missing_docs)]

pub mod buttons;
pub mod callback;
pub mod controller;
pub mod error;
pub mod logging;
pub mod markup;
pub mod order;
pub mod rows;
pub mod session;
pub mod settings;
pub mod sink;
pub mod style;

pub use buttons::{Affordance, ButtonState, Buttons, MemoryButton};
pub use callback::Callback;
pub use controller::{DEFAULT_DRAGGED_CLASS, ReorderController};
pub use error::{ConfigurationError, ReorderError, SinkFailure, ValidationError};
pub use markup::{ActionMode, ButtonRole, ContainerConfig};
pub use order::{Order, is_equal};
pub use rows::{MemoryRow, MemoryRows, RowList};
pub use session::{ContainerId, DragSession};
pub use settings::Settings;
pub use sink::{OrderSink, OrderUpload, Submission, Ticket};
pub use style::{STYLE_ELEMENT_ID, StyleHost, ensure_styles, stylesheet};

#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
