//! Page configuration.
//!
//! Defaults describe the portfolio markup this crate was written for. A page
//! can override any subset by embedding JSON:
//!
//! ```html
//! <script id="fx-config" type="application/json">
//!   { "section_selectors": [".work", ".footer"], "preloader_logo": "AB" }
//! </script>
//! ```

use serde::Deserialize;

use crate::components::particle_field::{FieldStyleOverride, Variant};

/// Element id holding inline JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Selectors, thresholds and styles for every page effect.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
	/// Container receiving the glyph field.
	pub hero_selector: String,
	/// Containers receiving an ambient dot field each.
	pub section_selectors: Vec<String>,
	/// Tweaks applied over the hero preset.
	pub hero_field: FieldStyleOverride,
	/// Tweaks applied over the ambient preset.
	pub section_field: FieldStyleOverride,
	/// Scroll offset past which the navbar gets `scrolled`.
	pub nav_scrolled_after: f64,
	/// How far above a section's top its nav link already counts as active.
	pub nav_active_offset: f64,
	/// Space left above anchor targets for the fixed navbar.
	pub anchor_offset: f64,
	/// Fraction of the viewport height scrolled before back-to-top shows.
	pub back_to_top_ratio: f64,
	/// Viewport width the custom cursor requires.
	pub cursor_min_width: f64,
	pub preloader_logo: String,
	/// Delay between portfolio items revealing, in milliseconds.
	pub reveal_stagger_ms: u64,
	/// Delay between portfolio items filtering, in milliseconds.
	pub filter_stagger_ms: u64,
}

impl Default for FxConfig {
	fn default() -> Self {
		Self {
			hero_selector: ".hero".into(),
			section_selectors: [".portfolio", ".resume", ".about", ".contact", ".footer"]
				.into_iter()
				.map(String::from)
				.collect(),
			hero_field: FieldStyleOverride::default(),
			section_field: FieldStyleOverride::default(),
			nav_scrolled_after: 100.0,
			nav_active_offset: 200.0,
			anchor_offset: 80.0,
			back_to_top_ratio: 0.8,
			cursor_min_width: 768.0,
			preloader_logo: "MR".into(),
			reveal_stagger_ms: 100,
			filter_stagger_ms: 50,
		}
	}
}

impl FxConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Style overrides configured for `variant`.
	pub fn overrides(&self, variant: Variant) -> &FieldStyleOverride {
		match variant {
			Variant::Hero => &self.hero_field,
			Variant::Ambient => &self.section_field,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::FieldStyle;

	#[test]
	fn empty_object_is_default() {
		assert_eq!(FxConfig::from_json("{}").unwrap(), FxConfig::default());
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let cfg = FxConfig::from_json(
			r#"{ "section_selectors": [".work"], "preloader_logo": "AB" }"#,
		)
		.unwrap();
		assert_eq!(cfg.section_selectors, vec![".work".to_string()]);
		assert_eq!(cfg.preloader_logo, "AB");
		assert_eq!(cfg.hero_selector, ".hero");
		assert_eq!(cfg.overrides(Variant::Hero).resolve(Variant::Hero), FieldStyle::hero());
	}

	#[test]
	fn partial_field_style_keeps_preset_and_siblings() {
		let cfg = FxConfig::from_json(
			r#"{ "preloader_logo": "AB", "hero_field": { "margin": 20.0 } }"#,
		)
		.unwrap();
		assert_eq!(cfg.preloader_logo, "AB");
		assert_eq!(
			cfg.overrides(Variant::Hero).resolve(Variant::Hero),
			FieldStyle {
				margin: 20.0,
				..FieldStyle::hero()
			}
		);
		assert_eq!(
			cfg.overrides(Variant::Ambient).resolve(Variant::Ambient),
			FieldStyle::ambient()
		);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(FxConfig::from_json("{ hero_selector: ").is_err());
	}
}
