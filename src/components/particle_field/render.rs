//! Drawing particle fields.
//!
//! Rendering goes through [`DrawSurface`], which covers exactly the primitives
//! a field needs. The browser implementation forwards to
//! `CanvasRenderingContext2d`.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;

/// Minimal 2d drawing surface.
pub trait DrawSurface {
	/// Maps logical pixels onto device pixels.
	fn set_pixel_scale(&self, scale: f64);
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str);
	/// Draws `text` centred on `(x, y)`, rotated by `rotation` radians.
	#[allow(clippy::too_many_arguments)]
	fn fill_rotated_text(
		&self,
		text: &str,
		x: f64,
		y: f64,
		rotation: f64,
		alpha: f64,
		font: &str,
		fill: &str,
	);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn set_pixel_scale(&self, scale: f64) {
		let _ = self.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
	}

	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str) {
		self.begin_path();
		self.set_fill_style_str(fill);
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn fill_rotated_text(
		&self,
		text: &str,
		x: f64,
		y: f64,
		rotation: f64,
		alpha: f64,
		font: &str,
		fill: &str,
	) {
		self.save();
		let _ = self.translate(x, y);
		let _ = self.rotate(rotation);
		self.set_global_alpha(alpha);
		self.set_fill_style_str(fill);
		self.set_font(font);
		self.set_text_align("center");
		self.set_text_baseline("middle");
		let _ = self.fill_text(text, 0.0, 0.0);
		self.restore();
	}
}

/// Clears the surface and draws every particle at its current position.
pub fn render(field: &ParticleField, surface: &impl DrawSurface) {
	surface.clear(field.width, field.height);

	let color = field.style.color;
	let solid = color.with_alpha(1.0).to_css();

	for p in &field.particles {
		match field.glyph(p) {
			Some(glyph) => surface.fill_rotated_text(
				glyph,
				p.x,
				p.y,
				p.rotation,
				p.alpha,
				&field.style.font(p.size),
				&solid,
			),
			None => {
				surface.fill_circle(p.x, p.y, p.size, &color.with_alpha(p.alpha).to_css())
			}
		}
	}
}
