//! # dragreorder
//!
//! Drag-and-drop reordering of HTML table rows.
//!
//! Rows of a marked-up table become draggable; the resulting order of row
//! identifiers is handed to a result sink (a callback, a JS function or an
//! HTTP upload) when the save button is clicked or at the end of every drag.
//! Save, cancel and "conditional" buttons are shown and hidden depending on
//! whether the order differs from the last saved one.
//!
//! ## Crates
//!
//! - [`dragreorder_core`]: the platform-independent state machine, usable and
//!   testable without a browser
//! - `dragreorder_dom` (re-exported as `dom` on `wasm32`): the `web-sys`
//!   binding and the `DragReorder` JavaScript class
//!
//! ## Markup
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
//! ```
//!
//! ## Feature Flags
//!
//! - `debug-trace` - log every drag event and relocation

pub use dragreorder_core::*;

#[cfg(target_arch = "wasm32")]
pub use dragreorder_dom as dom;
