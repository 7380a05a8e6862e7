//! Visual style for particle fields.
//!
//! Two presets exist: [`FieldStyle::hero`] for the glyph field over the hero
//! banner and [`FieldStyle::ambient`] for the faint dots behind other sections.
//! Both can be overridden field by field from the page configuration through
//! [`FieldStyleOverride`]; keys left out keep the preset's value.

use serde::{Deserialize, Deserializer};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Which kind of field a container gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
	/// Dense, rotating code glyphs.
	Hero,
	/// Sparse, static-looking dots.
	Ambient,
}

/// Half-open sampling interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}
}

/// Pointer repulsion settings.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Repulsion {
	/// Interaction radius in logical pixels.
	pub radius: f64,
	/// Velocity gained per frame at the pointer itself.
	pub strength: f64,
}

impl Repulsion {
	/// Velocity increment for a particle offset `(dx, dy)` from the pointer.
	///
	/// Falls off as `(R² - d²) / R²` and is exactly zero at or beyond `R`.
	pub fn impulse(&self, dx: f64, dy: f64) -> (f64, f64) {
		let r2 = self.radius * self.radius;
		let dist2 = dx * dx + dy * dy;
		if dist2 >= r2 {
			return (0.0, 0.0);
		}
		let force = (r2 - dist2) / r2;
		let norm = (dist2 + 0.001).sqrt();
		(
			dx / norm * force * self.strength,
			dy / norm * force * self.strength,
		)
	}
}

/// Complete configuration for one particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	/// Minimum particle count regardless of area.
	pub floor_count: usize,
	/// Logical pixels of area per particle.
	pub density_divisor: f64,
	/// Halo width beyond the visible bounds before wraparound.
	pub margin: f64,
	pub vx: Span,
	pub vy: Span,
	pub size: Span,
	pub alpha: Span,
	/// Per-frame rotation range; `None` disables rotation.
	pub spin: Option<Span>,
	/// Glyph pool; empty means particles are drawn as dots.
	pub glyphs: Vec<String>,
	pub repulsion: Repulsion,
	/// Shift applied to every particle per pointer-move, scaled by the
	/// normalized pointer offset from the container centre.
	pub pointer_drift: f64,
	/// CSS opacity of the whole surface.
	pub surface_opacity: f64,
	pub color: Color,
	pub font_family: String,
}

const MONO_STACK: &str =
	"SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace";

impl FieldStyle {
	/// Code-glyph field for the hero banner.
	pub fn hero() -> Self {
		Self {
			floor_count: 30,
			density_divisor: 45_000.0,
			margin: 50.0,
			vx: Span::new(-0.15, 0.15),
			vy: Span::new(0.1, 0.5),
			size: Span::new(10.0, 22.0),
			alpha: Span::new(0.25, 0.7),
			spin: Some(Span::new(-0.002, 0.002)),
			glyphs: ["</>", "<>", "{}", "[]", "()", "01", "λ", "π", "Σ", "⚙"]
				.into_iter()
				.map(String::from)
				.collect(),
			repulsion: Repulsion {
				radius: 120.0,
				strength: 0.02,
			},
			pointer_drift: 0.0,
			surface_opacity: 0.35,
			color: Color::WHITE,
			font_family: MONO_STACK.to_string(),
		}
	}

	/// Faint dot field for content sections.
	pub fn ambient() -> Self {
		Self {
			floor_count: 12,
			density_divisor: 120_000.0,
			margin: 10.0,
			vx: Span::new(-0.15, 0.15),
			vy: Span::new(-0.05, 0.15),
			size: Span::new(1.5, 4.0),
			alpha: Span::new(0.05, 0.18),
			spin: None,
			glyphs: Vec::new(),
			repulsion: Repulsion {
				radius: 80.0,
				strength: 0.01,
			},
			pointer_drift: 0.3,
			surface_opacity: 0.12,
			color: Color::WHITE,
			font_family: MONO_STACK.to_string(),
		}
	}

	pub fn for_variant(variant: Variant) -> Self {
		match variant {
			Variant::Hero => Self::hero(),
			Variant::Ambient => Self::ambient(),
		}
	}

	/// Number of particles for a `width` x `height` surface.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		let area = (width * height).max(0.0);
		let by_area = if self.density_divisor > 0.0 {
			(area / self.density_divisor).floor() as usize
		} else {
			0
		};
		by_area.max(self.floor_count)
	}

	/// CSS font shorthand for a glyph of the given pixel size.
	pub fn font(&self, size: f64) -> String {
		format!("{size}px {}", self.font_family)
	}
}

/// Partial [`FieldStyle`] read from configuration.
///
/// Every key is optional. `spin` distinguishes an absent key (keep the preset)
/// from an explicit `null` (disable rotation).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldStyleOverride {
	pub floor_count: Option<usize>,
	pub density_divisor: Option<f64>,
	pub margin: Option<f64>,
	pub vx: Option<Span>,
	pub vy: Option<Span>,
	pub size: Option<Span>,
	pub alpha: Option<Span>,
	#[serde(deserialize_with = "present")]
	pub spin: Option<Option<Span>>,
	pub glyphs: Option<Vec<String>>,
	pub repulsion: Option<Repulsion>,
	pub pointer_drift: Option<f64>,
	pub surface_opacity: Option<f64>,
	pub color: Option<Color>,
	pub font_family: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

impl FieldStyleOverride {
	/// Copies every key that was set over `base`.
	pub fn apply(&self, base: FieldStyle) -> FieldStyle {
		let o = self.clone();
		FieldStyle {
			floor_count: o.floor_count.unwrap_or(base.floor_count),
			density_divisor: o.density_divisor.unwrap_or(base.density_divisor),
			margin: o.margin.unwrap_or(base.margin),
			vx: o.vx.unwrap_or(base.vx),
			vy: o.vy.unwrap_or(base.vy),
			size: o.size.unwrap_or(base.size),
			alpha: o.alpha.unwrap_or(base.alpha),
			spin: o.spin.unwrap_or(base.spin),
			glyphs: o.glyphs.unwrap_or(base.glyphs),
			repulsion: o.repulsion.unwrap_or(base.repulsion),
			pointer_drift: o.pointer_drift.unwrap_or(base.pointer_drift),
			surface_opacity: o.surface_opacity.unwrap_or(base.surface_opacity),
			color: o.color.unwrap_or(base.color),
			font_family: o.font_family.unwrap_or(base.font_family),
		}
	}

	/// The `variant` preset with this override applied.
	pub fn resolve(&self, variant: Variant) -> FieldStyle {
		self.apply(FieldStyle::for_variant(variant))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ambient_small_section_clamps_to_floor() {
		assert_eq!(FieldStyle::ambient().particle_count(400.0, 300.0), 12);
	}

	#[test]
	fn hero_banner_clamps_to_floor() {
		assert_eq!(FieldStyle::hero().particle_count(900.0, 450.0), 30);
	}

	#[test]
	fn large_area_exceeds_floor() {
		// 1920 * 1080 / 45000 = 46.08
		assert_eq!(FieldStyle::hero().particle_count(1920.0, 1080.0), 46);
	}

	#[test]
	fn zero_area_uses_floor() {
		assert_eq!(FieldStyle::ambient().particle_count(0.0, 0.0), 12);
		assert_eq!(FieldStyle::hero().particle_count(1200.0, 0.0), 30);
	}

	#[test]
	fn empty_override_resolves_to_preset() {
		let none = FieldStyleOverride::default();
		assert_eq!(none.resolve(Variant::Hero), FieldStyle::hero());
		assert_eq!(none.resolve(Variant::Ambient), FieldStyle::ambient());
	}

	#[test]
	fn impulse_zero_outside_radius() {
		let rep = FieldStyle::hero().repulsion;
		assert_eq!(rep.impulse(120.0, 0.0), (0.0, 0.0));
		assert_eq!(rep.impulse(100.0, 100.0), (0.0, 0.0));
	}

	#[test]
	fn impulse_positive_just_inside_radius() {
		let rep = FieldStyle::hero().repulsion;
		let (ix, iy) = rep.impulse(120.0 - 1e-3, 0.0);
		assert!(ix > 0.0, "expected outward push, got {ix}");
		assert_eq!(iy, 0.0);
	}

	#[test]
	fn impulse_points_away_from_pointer() {
		let rep = FieldStyle::ambient().repulsion;
		let (ix, iy) = rep.impulse(-10.0, 20.0);
		assert!(ix < 0.0 && iy > 0.0);
	}

	#[test]
	fn color_css() {
		assert_eq!(Color::WHITE.to_css(), "#ffffff");
		assert_eq!(
			Color::WHITE.with_alpha(0.5).to_css(),
			"rgba(255, 255, 255, 0.5)"
		);
	}

	#[test]
	fn override_replaces_only_given_keys() {
		let json = r#"{
			"floor_count": 5,
			"color": {"r": 10, "g": 20, "b": 30},
			"font_family": "monospace"
		}"#;
		let over: FieldStyleOverride = serde_json::from_str(json).unwrap();
		let style = over.resolve(Variant::Ambient);
		assert_eq!(style.floor_count, 5);
		assert_eq!(style.color, Color::rgb(10, 20, 30));
		assert_eq!(style.font(12.0), "12px monospace");
		assert_eq!(style.margin, FieldStyle::ambient().margin);
		assert_eq!(style.repulsion, FieldStyle::ambient().repulsion);
	}

	#[test]
	fn spin_null_disables_rotation() {
		let over: FieldStyleOverride = serde_json::from_str(r#"{"spin": null}"#).unwrap();
		assert_eq!(over.resolve(Variant::Hero).spin, None);

		let absent: FieldStyleOverride = serde_json::from_str("{}").unwrap();
		assert_eq!(absent.resolve(Variant::Hero).spin, FieldStyle::hero().spin);
	}

	#[test]
	fn unknown_override_key_is_rejected() {
		assert!(serde_json::from_str::<FieldStyleOverride>(r#"{"margn": 1.0}"#).is_err());
	}
}
