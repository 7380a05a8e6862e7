//! Full-screen preloader with a simulated progress bar.
//!
//! Progress advances in random steps every 200ms. Once it reaches 100% the
//! overlay fades out and is removed together with its stylesheet.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Style;
use log::warn;

const CSS: &str = r#"
.preloader {
	position: fixed;
	top: 0;
	left: 0;
	width: 100%;
	height: 100%;
	background: #fff;
	display: flex;
	align-items: center;
	justify-content: center;
	z-index: 9999;
	opacity: 1;
	transition: opacity 0.5s ease;
}
.preloader-content { text-align: center; }
.preloader-logo {
	font-family: 'Playfair Display', serif;
	font-size: 3rem;
	font-weight: 600;
	margin-bottom: 2rem;
	color: #000;
}
.preloader-progress {
	width: 200px;
	height: 2px;
	background: #f0f0f0;
	overflow: hidden;
}
.preloader-bar {
	width: 0%;
	height: 100%;
	background: #000;
	transition: width 0.3s ease;
}
.preloader.hidden {
	opacity: 0;
	pointer-events: none;
}
"#;

const TICK: Duration = Duration::from_millis(200);
const FADE: Duration = Duration::from_millis(500);
/// Largest progress gain per tick, in percent.
const MAX_STEP: f64 = 30.0;

/// Progress after one tick, given a uniform `roll` in `[0, 1)`.
pub fn advance(progress: f64, roll: f64) -> f64 {
	(progress + roll * MAX_STEP).min(100.0)
}

/// Loading overlay showing `logo` above a progress bar.
#[component]
pub fn Preloader(#[prop(into)] logo: String) -> impl IntoView {
	let (progress, set_progress) = signal(0.0_f64);
	let (hidden, set_hidden) = signal(false);
	let (removed, set_removed) = signal(false);

	let interval: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));
	let interval_tick = interval.clone();
	let started = set_interval_with_handle(
		move || {
			let next = advance(progress.get_untracked(), js_sys::Math::random());
			set_progress.set(next);
			if next < 100.0 {
				return;
			}
			if let Some(handle) = interval_tick.take() {
				handle.clear();
			}
			set_timeout(
				move || {
					set_hidden.set(true);
					set_timeout(move || set_removed.set(true), FADE);
				},
				FADE,
			);
		},
		TICK,
	);
	match started {
		Ok(handle) => interval.set(Some(handle)),
		Err(e) => {
			warn!("portfolio-fx: preloader timer failed: {e:?}");
			set_removed.set(true);
		}
	}

	view! {
		<Show when=move || !removed.get()>
			<Style>{CSS}</Style>
			<div class="preloader" class:hidden=move || hidden.get()>
				<div class="preloader-content">
					<div class="preloader-logo">{logo.clone()}</div>
					<div class="preloader-progress">
						<div
							class="preloader-bar"
							style:width=move || format!("{}%", progress.get())
						></div>
					</div>
				</div>
			</div>
		</Show>
	}
}
