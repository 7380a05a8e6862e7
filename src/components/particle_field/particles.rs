//! Particle state and per-frame physics.

use std::f64::consts::TAU;

use super::theme::FieldStyle;
use crate::prng::Xorshift64;

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub alpha: f64,
	pub rotation: f64,
	pub spin: f64,
	/// Index into the style's glyph pool (hero fields only).
	pub glyph: Option<usize>,
}

/// Particles for one container, plus the pointer they react to.
///
/// The particle sequence is only ever replaced wholesale by [`resize`](Self::resize).
pub struct ParticleField {
	pub style: FieldStyle,
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	/// Container-local pointer position, `None` when the pointer is outside.
	pointer: Option<(f64, f64)>,
	rng: Xorshift64,
}

impl ParticleField {
	pub fn new(style: FieldStyle, width: f64, height: f64, seed: u64) -> Self {
		let mut field = Self {
			style,
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
			pointer: None,
			rng: Xorshift64::new(seed),
		};
		field.resize(width, height);
		field
	}

	/// Adopts new dimensions and rebuilds every particle from scratch.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		let count = self.style.particle_count(self.width, self.height);
		let particles = (0..count).map(|_| self.spawn()).collect();
		self.particles = particles;
	}

	fn spawn(&mut self) -> Particle {
		let style = &self.style;
		let rng = &mut self.rng;
		let x = rng.range(0.0, self.width);
		let y = rng.range(0.0, self.height);
		let vx = rng.range(style.vx.min, style.vx.max);
		let vy = rng.range(style.vy.min, style.vy.max);
		let size = rng.range(style.size.min, style.size.max);
		let glyph = if style.glyphs.is_empty() {
			None
		} else {
			Some(rng.index(style.glyphs.len()))
		};
		let (rotation, spin) = match style.spin {
			Some(span) => (rng.range(0.0, TAU), rng.range(span.min, span.max)),
			None => (0.0, 0.0),
		};
		let alpha = rng.range(style.alpha.min, style.alpha.max);

		Particle {
			x,
			y,
			vx,
			vy,
			size,
			alpha,
			rotation,
			spin,
			glyph,
		}
	}

	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Shifts every particle by a normalized pointer offset (`-0.5..=0.5` per
	/// axis) scaled by the style's drift factor.
	pub fn nudge(&mut self, nx: f64, ny: f64) {
		let drift = self.style.pointer_drift;
		if drift == 0.0 {
			return;
		}
		for p in &mut self.particles {
			p.x += nx * drift;
			p.y += ny * drift;
		}
	}

	/// Glyph text for a particle, if it has one.
	pub fn glyph(&self, particle: &Particle) -> Option<&str> {
		particle
			.glyph
			.and_then(|i| self.style.glyphs.get(i))
			.map(String::as_str)
	}

	/// Advances the simulation by one frame.
	pub fn step(&mut self) {
		let (width, height, margin) = (self.width, self.height, self.style.margin);
		let repulsion = self.style.repulsion;
		let pointer = self.pointer;

		for i in 0..self.particles.len() {
			let respawn_x = self.rng.range(0.0, width);
			let p = &mut self.particles[i];

			if let Some((mx, my)) = pointer {
				let (ix, iy) = repulsion.impulse(p.x - mx, p.y - my);
				p.vx += ix;
				p.vy += iy;
			}

			p.x += p.vx;
			p.y += p.vy;
			p.rotation += p.spin;

			// Wrap through the halo
			if p.x < -margin {
				p.x = width + margin;
			} else if p.x > width + margin {
				p.x = -margin;
			}
			if p.y > height + margin {
				p.y = -margin;
				p.x = respawn_x;
			} else if p.y < -margin {
				p.y = height + margin;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn within_halo(field: &ParticleField) -> bool {
		let m = field.style.margin;
		field.particles.iter().all(|p| {
			p.x >= -m && p.x <= field.width + m && p.y >= -m && p.y <= field.height + m
		})
	}

	#[test]
	fn initial_counts_follow_density() {
		let ambient = ParticleField::new(FieldStyle::ambient(), 400.0, 300.0, 1);
		assert_eq!(ambient.particles.len(), 12);

		let hero = ParticleField::new(FieldStyle::hero(), 900.0, 450.0, 1);
		assert_eq!(hero.particles.len(), 30);
	}

	#[test]
	fn resize_rebuilds_to_new_density() {
		let mut field = ParticleField::new(FieldStyle::hero(), 100.0, 100.0, 5);
		field.resize(3000.0, 1500.0);
		assert_eq!(field.particles.len(), 100);
		for p in &field.particles {
			assert!(p.x >= 0.0 && p.x < 3000.0);
			assert!(p.y >= 0.0 && p.y < 1500.0);
		}
	}

	#[test]
	fn resize_twice_keeps_count() {
		let mut field = ParticleField::new(FieldStyle::ambient(), 1600.0, 900.0, 8);
		field.resize(1600.0, 900.0);
		let first = field.particles.len();
		field.resize(1600.0, 900.0);
		assert_eq!(first, field.particles.len());
		assert_eq!(first, 12);
	}

	#[test]
	fn zero_size_container_keeps_floor() {
		let mut field = ParticleField::new(FieldStyle::hero(), 0.0, 0.0, 2);
		assert_eq!(field.particles.len(), 30);
		for _ in 0..10 {
			field.step();
		}
		assert!(within_halo(&field));
	}

	#[test]
	fn hero_particles_carry_glyphs_and_spin() {
		let field = ParticleField::new(FieldStyle::hero(), 800.0, 600.0, 4);
		for p in &field.particles {
			assert!(field.glyph(p).is_some());
			assert!(p.spin.abs() <= 0.002);
		}
	}

	#[test]
	fn ambient_particles_are_plain_dots() {
		let field = ParticleField::new(FieldStyle::ambient(), 800.0, 600.0, 4);
		for p in &field.particles {
			assert!(field.glyph(p).is_none());
			assert_eq!(p.spin, 0.0);
		}
	}

	#[test]
	fn cleared_pointer_leaves_velocity_alone() {
		let mut field = ParticleField::new(FieldStyle::hero(), 900.0, 450.0, 11);
		field.set_pointer(450.0, 225.0);
		field.clear_pointer();
		let before: Vec<_> = field.particles.iter().map(|p| (p.vx, p.vy)).collect();
		field.step();
		let after: Vec<_> = field.particles.iter().map(|p| (p.vx, p.vy)).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn pointer_pushes_nearby_particle_away() {
		let mut field = ParticleField::new(FieldStyle::hero(), 900.0, 450.0, 11);
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		(p.x, p.y, p.vx, p.vy) = (400.0, 200.0, 0.0, 0.0);
		field.set_pointer(390.0, 200.0);
		field.step();
		assert!(field.particles[0].vx > 0.0);
		assert_eq!(field.particles[0].vy, 0.0);
	}

	#[test]
	fn distant_particle_ignores_pointer() {
		let mut field = ParticleField::new(FieldStyle::hero(), 900.0, 450.0, 11);
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		(p.x, p.y, p.vx, p.vy) = (800.0, 400.0, 0.1, 0.2);
		field.set_pointer(10.0, 10.0);
		field.step();
		assert_eq!((field.particles[0].vx, field.particles[0].vy), (0.1, 0.2));
	}

	#[test]
	fn bottom_exit_respawns_at_top() {
		let mut field = ParticleField::new(FieldStyle::hero(), 900.0, 450.0, 3);
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		(p.x, p.y, p.vx, p.vy) = (100.0, 499.9, 0.0, 0.5);
		field.step();
		let p = &field.particles[0];
		assert_eq!(p.y, -50.0);
		assert!(p.x >= 0.0 && p.x < 900.0);
	}

	#[test]
	fn horizontal_exit_keeps_row() {
		let mut field = ParticleField::new(FieldStyle::ambient(), 400.0, 300.0, 3);
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		(p.x, p.y, p.vx, p.vy) = (-9.95, 120.0, -0.1, 0.0);
		field.step();
		assert_eq!((field.particles[0].x, field.particles[0].y), (410.0, 120.0));
	}

	#[test]
	fn top_exit_wraps_to_bottom() {
		let mut field = ParticleField::new(FieldStyle::ambient(), 400.0, 300.0, 3);
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		(p.x, p.y, p.vx, p.vy) = (50.0, -9.99, 0.0, -0.05);
		field.step();
		assert_eq!(field.particles[0].y, 310.0);
	}

	#[test]
	fn nudge_only_moves_drifting_styles() {
		let mut ambient = ParticleField::new(FieldStyle::ambient(), 400.0, 300.0, 9);
		let x0 = ambient.particles[0].x;
		ambient.nudge(0.5, 0.0);
		assert!((ambient.particles[0].x - (x0 + 0.15)).abs() < 1e-9);

		let mut hero = ParticleField::new(FieldStyle::hero(), 400.0, 300.0, 9);
		let x0 = hero.particles[0].x;
		hero.nudge(0.5, 0.0);
		assert_eq!(hero.particles[0].x, x0);
	}

	proptest! {
		#[test]
		fn particles_stay_within_halo(
			width in 0.0f64..2500.0,
			height in 0.0f64..1500.0,
			seed in any::<u64>(),
			steps in 1usize..400,
			pointer in proptest::option::of((-100.0f64..2600.0, -100.0f64..1600.0)),
			hero in any::<bool>(),
		) {
			let style = if hero { FieldStyle::hero() } else { FieldStyle::ambient() };
			let mut field = ParticleField::new(style, width, height, seed);
			if let Some((x, y)) = pointer {
				field.set_pointer(x, y);
			}
			for _ in 0..steps {
				field.step();
				prop_assert!(within_halo(&field));
			}
		}

		#[test]
		fn resize_count_is_deterministic(
			width in 0.0f64..5000.0,
			height in 0.0f64..5000.0,
			hero in any::<bool>(),
		) {
			let style = if hero { FieldStyle::hero() } else { FieldStyle::ambient() };
			let expected = ((width * height / style.density_divisor).floor() as usize)
				.max(style.floor_count);
			let mut field = ParticleField::new(style, 10.0, 10.0, 1);
			field.resize(width, height);
			prop_assert_eq!(field.particles.len(), expected);
		}
	}
}
