//! CSRF token lookup for the order upload
//!
//! The token is read from the `csrftoken` cookie, falling back to a
//! `<meta name="csrf-token">` tag, and sent in the `X-CSRFToken` header.

/// The cookie holding the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// The meta tag holding the CSRF token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// The request header carrying the CSRF token.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Retrieves the CSRF token from the cookie or the meta tag.
#[cfg(target_arch = "wasm32")]
pub fn get_csrf_token() -> Option<String> {
	get_csrf_token_from_cookie().or_else(get_csrf_token_from_meta)
}

#[cfg(target_arch = "wasm32")]
fn get_csrf_token_from_cookie() -> Option<String> {
	use wasm_bindgen::JsCast;
	use web_sys::HtmlDocument;

	let document = web_sys::window()?.document()?;
	let cookies = document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
	parse_cookie_value(&cookies, CSRF_COOKIE_NAME)
}

#[cfg(target_arch = "wasm32")]
fn get_csrf_token_from_meta() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let selector = format!("meta[name=\"{}\"]", CSRF_META_NAME);
	document
		.query_selector(&selector)
		.ok()??
		.get_attribute("content")
}

/// The CSRF header as `(name, value)`, if a token is available.
#[cfg(target_arch = "wasm32")]
pub fn csrf_header() -> Option<(&'static str, String)> {
	get_csrf_token().map(|token| (CSRF_HEADER_NAME, token))
}

/// Parses one value out of a `name1=value1; name2=value2` cookie string.
pub fn parse_cookie_value(cookies: &str, name: &str) -> Option<String> {
	cookies.split(';').find_map(|part| {
		let (key, value) = part.split_once('=')?;
		(key.trim() == name).then(|| value.trim().to_string())
	})
}
