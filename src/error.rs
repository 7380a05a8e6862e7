//! Error types for page effects.
//!
//! None of these ever reach the visitor: installers log them and move on.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors produced while installing or driving page effects.
#[derive(Debug, Error)]
pub enum FxError {
	/// A selector matched nothing in the document.
	#[error("no element matches selector '{0}'")]
	MissingContainer(String),

	/// A container had zero area when a field was sized.
	#[error("container has degenerate size {width}x{height}")]
	DegenerateSize { width: f64, height: f64 },

	/// The global `window` or `document` is unavailable.
	#[error("no window or document available")]
	NoDocument,

	/// The container already holds a particle surface.
	#[error("container already has a particle surface")]
	AlreadyMounted,

	/// A 2d drawing context could not be acquired from a canvas.
	#[error("canvas context unavailable: {0}")]
	Canvas(String),

	/// A host call failed.
	#[error("javascript error: {0}")]
	Js(String),

	/// Inline configuration could not be parsed.
	#[error("invalid configuration: {0}")]
	Config(#[from] serde_json::Error),
}

impl FxError {
	/// Whether this is an ordinary outcome on a page lacking some markup,
	/// rather than a host failure.
	pub fn is_skip(&self) -> bool {
		matches!(
			self,
			FxError::MissingContainer(_) | FxError::AlreadyMounted | FxError::DegenerateSize { .. }
		)
	}
}

impl From<JsValue> for FxError {
	fn from(value: JsValue) -> Self {
		FxError::Js(
			value
				.as_string()
				.unwrap_or_else(|| format!("{value:?}")),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_container_names_selector() {
		let msg = FxError::MissingContainer(".hero".into()).to_string();
		assert!(msg.contains(".hero"), "missing selector in: {msg}");
	}

	#[test]
	fn degenerate_size_includes_dimensions() {
		let msg = FxError::DegenerateSize {
			width: 0.0,
			height: 240.0,
		}
		.to_string();
		assert!(msg.contains("0x240"), "missing dimensions in: {msg}");
	}

	#[test]
	fn duplicate_surface_is_a_skip_not_a_host_failure() {
		let err = FxError::AlreadyMounted;
		assert!(err.is_skip());
		assert!(!matches!(err, FxError::Js(_)));
		assert!(FxError::MissingContainer(".about".into()).is_skip());
		assert!(!FxError::Js("boom".into()).is_skip());
		assert!(!FxError::Canvas("no 2d".into()).is_skip());
	}

	#[test]
	fn config_error_wraps_serde() {
		let err: FxError = serde_json::from_str::<u32>("nope").unwrap_err().into();
		assert!(matches!(err, FxError::Config(_)));
	}
}
