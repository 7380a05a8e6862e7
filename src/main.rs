//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use log::warn;
use portfolio_fx::{App, init_logging, install, load_config};

fn main() {
	init_logging();

	let config = load_config();
	match install(&config) {
		Ok(effects) => effects.persist(),
		Err(e) => warn!("portfolio-fx: effects not installed: {}", e),
	}

	mount_to_body(move || {
		view! { <App config=config /> }
	})
}
