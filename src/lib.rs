//! portfolio-fx: visual effects layer for a static portfolio page.
//!
//! The page markup is served as-is; this crate decorates it from WASM:
//! animated particle canvases behind the hero and each section, plus the
//! surrounding shell (navigation state, parallax, reveal-on-scroll, filters,
//! preloader and friends).
//!
//! Everything installed is owned by a [`PageEffects`] value. Dropping it (or
//! calling [`PageEffects::dispose`]) tears the effects down; the entrypoint
//! calls [`PageEffects::persist`] to keep them for the page's lifetime.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod prng;

use components::particle_field::{self, Fields};
use components::shell::{
	self, BackToTop, CustomCursor, Preloader, ScrollProgress, dev_elements::DevElements,
	parallax::Parallax, reveal::Reveal,
};
pub use config::FxConfig;
use dom::ListenerHandle;
pub use error::FxError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

fn config_text(document: &Document) -> Option<String> {
	let element = document.get_element_by_id(config::CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load configuration from a script element with id="fx-config".
/// Falls back to defaults when the element is absent or malformed.
pub fn load_config() -> FxConfig {
	let Some(json) = dom::document().ok().as_ref().and_then(config_text) else {
		return FxConfig::default();
	};

	match FxConfig::from_json(&json) {
		Ok(config) => {
			info!(
				"portfolio-fx: loaded config, {} section selectors",
				config.section_selectors.len()
			);
			config
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse config: {}", e);
			FxConfig::default()
		}
	}
}

/// Everything [`install`] attached to the page.
pub struct PageEffects {
	fields: Fields,
	_parallax: Option<Parallax>,
	_reveal: Option<Reveal>,
	_dev_elements: Option<DevElements>,
	listeners: Vec<ListenerHandle>,
}

impl PageEffects {
	/// Number of particle fields currently animating.
	pub fn field_count(&self) -> usize {
		self.fields.mounted.len()
	}

	/// Keeps every effect alive until the page unloads.
	pub fn persist(self) {
		std::mem::forget(self);
	}

	/// Stops every animation, removes every listener and canvas, disconnects
	/// the reveal observer and detaches the dev-elements layer.
	pub fn dispose(self) {
		for field in &self.fields.mounted {
			field.cancel();
		}
		debug!(
			"portfolio-fx: disposing {} fields, {} listeners",
			self.fields.mounted.len(),
			self.listeners.len()
		);
	}
}

/// Logs and discards a failed sub-install. Missing markup is expected on
/// pages that leave a section out, so it only rates a debug line.
fn absorb<T>(what: &str, result: Result<T, FxError>) -> Option<T> {
	match result {
		Ok(value) => Some(value),
		Err(e) if e.is_skip() => {
			debug!("portfolio-fx: {what} skipped: {e}");
			None
		}
		Err(e) => {
			warn!("portfolio-fx: {what} failed: {e}");
			None
		}
	}
}

/// Attaches the particle fields and every markup-driven shell behaviour.
///
/// Only a missing document is fatal; each effect whose markup is absent is
/// skipped on its own.
pub fn install(config: &FxConfig) -> Result<PageEffects, FxError> {
	let document = dom::document()?;

	let fields = particle_field::install(&document, config);

	let mut listeners = Vec::new();
	listeners.extend(
		absorb("navigation", shell::navigation::install(&document, config))
			.into_iter()
			.flatten(),
	);
	listeners.extend(
		absorb("filters", shell::filters::install(&document, config.filter_stagger_ms))
			.into_iter()
			.flatten(),
	);
	listeners.extend(
		absorb("smooth scroll", shell::smooth_scroll::install(&document, config.anchor_offset))
			.into_iter()
			.flatten(),
	);
	listeners.extend(absorb("contact form", shell::contact::install(&document)));
	let _ = absorb("about layout", shell::about::apply(&document));

	let effects = PageEffects {
		_parallax: absorb("parallax", shell::parallax::install(&document)),
		_reveal: absorb("reveal", shell::reveal::install(&document, config.reveal_stagger_ms)),
		_dev_elements: absorb("dev elements", shell::dev_elements::install(&document)),
		fields,
		listeners,
	};

	info!(
		"portfolio-fx: installed {} fields, {} listeners",
		effects.field_count(),
		effects.listeners.len()
	);
	Ok(effects)
}

/// Overlay widgets rendered on top of the static page.
#[component]
pub fn App(config: FxConfig) -> impl IntoView {
	provide_meta_context();

	view! {
		<Preloader logo=config.preloader_logo />
		<ScrollProgress />
		<BackToTop ratio=config.back_to_top_ratio />
		<CustomCursor min_width=config.cursor_min_width />
	}
}
