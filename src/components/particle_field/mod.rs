//! Ambient particle fields drawn behind page sections.
//!
//! Each decorated container gets its own canvas and its own animation loop:
//! - a dense field of slowly rotating code glyphs over the hero banner
//! - a sparse field of faint dots behind every other configured section
//!
//! Particles drift, wrap around a halo just outside the container and are
//! pushed away from the pointer. A window resize rebuilds every field at the
//! density its new area calls for.
//!
//! # Example
//!
//! ```ignore
//! let hero = dom::query(&document, ".hero")?;
//! let field = particle_field::mount(&hero, Variant::Hero, &FieldStyleOverride::default())?;
//! let resize = ResizeAdapter::attach(vec![field.surface()])?;
//! ```

mod component;
mod particles;
mod pointer;
mod render;
mod resize;
pub mod theme;

use log::{debug, info, warn};
use web_sys::Document;

pub use component::{FieldSurface, MountedField, mount};
pub(crate) use pointer::{centred_offset, local_position};
pub use particles::{Particle, ParticleField};
pub use render::{DrawSurface, render};
pub use resize::ResizeAdapter;
pub use theme::{Color, FieldStyle, FieldStyleOverride, Variant};

use crate::config::FxConfig;
use crate::dom;

/// Mounted fields plus the adapter keeping them sized.
pub struct Fields {
	pub mounted: Vec<MountedField>,
	pub resize: Option<ResizeAdapter>,
}

fn mount_selector(
	document: &Document,
	selector: &str,
	variant: Variant,
	config: &FxConfig,
) -> Option<MountedField> {
	let mounted = dom::query(document, selector)
		.and_then(|container| mount(&container, variant, config.overrides(variant)));
	match mounted {
		Ok(field) => Some(field),
		Err(e) if e.is_skip() => {
			debug!("portfolio-fx: skipping field for {selector}: {e}");
			None
		}
		Err(e) => {
			warn!("portfolio-fx: field for {selector} failed: {e}");
			None
		}
	}
}

/// Mounts the hero field and one ambient field per configured section.
///
/// Selectors that match nothing are skipped.
pub fn install(document: &Document, config: &FxConfig) -> Fields {
	let mut mounted = Vec::new();
	mounted.extend(mount_selector(
		document,
		&config.hero_selector,
		Variant::Hero,
		config,
	));
	for selector in &config.section_selectors {
		mounted.extend(mount_selector(document, selector, Variant::Ambient, config));
	}

	let resize = match ResizeAdapter::attach(mounted.iter().map(MountedField::surface).collect()) {
		Ok(adapter) => Some(adapter),
		Err(e) => {
			debug!("portfolio-fx: resize adapter unavailable: {e}");
			None
		}
	};

	info!(
		"portfolio-fx: {} particle fields, {} particles",
		mounted.len(),
		mounted.iter().map(MountedField::particle_count).sum::<usize>()
	);

	Fields { mounted, resize }
}
