//! Mounting a particle field into a page container.
//!
//! Mounting creates a canvas inside the container, sizes it to the container's
//! content box at device resolution, wires pointer listeners and starts a
//! [`FrameLoop`] that steps and redraws the field every refresh.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::particles::ParticleField;
use super::pointer;
use super::render::{self, DrawSurface};
use super::theme::{FieldStyle, FieldStyleOverride, Variant};
use crate::dom::{self, FrameLoop, ListenerHandle};
use crate::error::FxError;
use crate::prng;

/// Class given to every canvas this module creates.
pub const SURFACE_CLASS: &str = "section-particles";

/// A field together with the canvas it draws on.
pub struct FieldSurface {
	pub field: ParticleField,
	container: HtmlElement,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl FieldSurface {
	/// Re-reads the container size and rebuilds the field for it.
	///
	/// A zero-area container is not an error for the caller: the field keeps
	/// running at its floor count and picks up real dimensions on a later resize.
	pub fn resize(&mut self) -> Result<(), FxError> {
		let dpr = dom::window()?.device_pixel_ratio().max(1.0);
		let width = self.container.client_width().max(0) as f64;
		let height = self.container.client_height().max(0) as f64;

		self.canvas.set_width((width * dpr).floor() as u32);
		self.canvas.set_height((height * dpr).floor() as u32);
		let style = self.canvas.style();
		style.set_property("width", &format!("{width}px"))?;
		style.set_property("height", &format!("{height}px"))?;
		self.ctx.set_pixel_scale(dpr);

		self.field.resize(width, height);

		if width * height == 0.0 {
			return Err(FxError::DegenerateSize { width, height });
		}
		Ok(())
	}

	fn frame(&mut self) {
		self.field.step();
		render::render(&self.field, &self.ctx);
	}
}

/// A live field: its surface, listeners and animation loop.
///
/// Dropping it stops the animation, removes its listeners and detaches the canvas.
pub struct MountedField {
	surface: Rc<RefCell<FieldSurface>>,
	frames: FrameLoop,
	_listeners: Vec<ListenerHandle>,
}

impl MountedField {
	/// Weak handle for adapters that must not keep the field alive.
	pub fn surface(&self) -> Weak<RefCell<FieldSurface>> {
		Rc::downgrade(&self.surface)
	}

	pub fn particle_count(&self) -> usize {
		self.surface.borrow().field.particles.len()
	}

	/// Stops the animation while keeping the last frame on screen.
	pub fn cancel(&self) {
		self.frames.cancel();
	}
}

impl Drop for MountedField {
	fn drop(&mut self) {
		self.surface.borrow().canvas.remove();
	}
}

fn create_canvas(container: &HtmlElement, style: &FieldStyle) -> Result<HtmlCanvasElement, FxError> {
	let document = dom::document()?;
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")?
		.dyn_into()
		.map_err(|_| FxError::Canvas("created element is not a canvas".into()))?;
	canvas.set_class_name(SURFACE_CLASS);

	let css = canvas.style();
	for (name, value) in [
		("position", "absolute"),
		("inset", "0"),
		("width", "100%"),
		("height", "100%"),
		("z-index", "1"),
		("pointer-events", "none"),
	] {
		css.set_property(name, value)?;
	}
	css.set_property("opacity", &style.surface_opacity.to_string())?;

	let position = container.style().get_property_value("position")?;
	if position.is_empty() {
		container.style().set_property("position", "relative")?;
	}
	container.append_child(&canvas)?;
	Ok(canvas)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, FxError> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| FxError::Canvas("2d context not supported".into()))?
		.dyn_into()
		.map_err(|_| FxError::Canvas("context is not 2d".into()))
}

/// Mounts a `variant` field into `container`, tuned by `overrides`.
pub fn mount(
	container: &HtmlElement,
	variant: Variant,
	overrides: &FieldStyleOverride,
) -> Result<MountedField, FxError> {
	let existing = container.query_selector(&format!(":scope > canvas.{SURFACE_CLASS}"))?;
	if existing.is_some() {
		return Err(FxError::AlreadyMounted);
	}

	let style = overrides.resolve(variant);
	let canvas = create_canvas(container, &style)?;
	let ctx = context_2d(&canvas)?;
	let surface = Rc::new(RefCell::new(FieldSurface {
		field: ParticleField::new(style, 0.0, 0.0, prng::host_seed()),
		container: container.clone(),
		canvas,
		ctx,
	}));

	if let Err(e) = surface.borrow_mut().resize() {
		debug!("portfolio-fx: {e}, running at floor density");
	}

	let listeners = pointer::attach(container, &surface)?;

	let surface_frame = surface.clone();
	let frames = FrameLoop::start(move || surface_frame.borrow_mut().frame())?;

	Ok(MountedField {
		surface,
		frames,
		_listeners: listeners,
	})
}
