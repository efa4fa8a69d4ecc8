//! Logging macros shared by the core and the DOM binding
//!
//! The macros write to the browser console on WASM and emit `tracing` events
//! natively. Logging is observational only; nothing in the crate depends on
//! a message being emitted.
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `trace_log!` | No | `debug-trace` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | Required | None | `console.info` | `tracing::info!` |
//! | `warn_log!` | Required | None | `console.warn` | `tracing::warn!` |
//! | `error_log!` | No | None | `console.error` | `tracing::error!` |
//!
//! `trace_log!` is the per-event diagnostic channel (every drag event, every
//! relocation during a revert). It compiles away unless the `debug-trace`
//! feature is enabled.
//!
//! ## Example
//!
//! ```ignore
//! use dragreorder_core::{trace_log, warn_log};
//!
//! trace_log!("drag over row {}", index);
//! warn_log!("row {} lost its identifier", index);
//! ```

/// Logs a diagnostic message (requires the `debug-trace` feature)
#[macro_export]
#[cfg(all(feature = "debug-trace", target_arch = "wasm32"))]
macro_rules! trace_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a diagnostic message (requires the `debug-trace` feature)
#[macro_export]
#[cfg(all(feature = "debug-trace", not(target_arch = "wasm32")))]
macro_rules! trace_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!("{}", format!($($arg)*));
	}};
}

/// No-op trace_log when `debug-trace` is disabled
#[macro_export]
#[cfg(not(feature = "debug-trace"))]
macro_rules! trace_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!("{}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!("{}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs an error message
///
/// Stays active in release builds.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!("{}", format!($($arg)*));
	}};
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use crate::{error_log, info_log, trace_log, warn_log};

	#[rstest]
	fn test_logging_macros_compile() {
		trace_log!("Trace message: {}", 42);
		info_log!("Info message: {}", "test");
		warn_log!("Warning message: {:?}", vec![1, 2, 3]);
		error_log!("Error message: {}", "error");
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		trace_log!("Simple trace");
		info_log!("Simple info");
		warn_log!("Simple warning");
		error_log!("Simple error");
	}
}
