//! Contact form stub: fakes a submission round-trip with button feedback.
//!
//! Nothing is sent anywhere. The form is reset once the "sent" state shows.

use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement};

use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

/// Visual states the submit button moves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
	Idle,
	Sending,
	Sent,
}

impl SubmitState {
	pub fn label(self) -> &'static str {
		match self {
			SubmitState::Idle => "Enviar mensaje",
			SubmitState::Sending => "Enviando...",
			SubmitState::Sent => "¡Mensaje enviado!",
		}
	}

	/// Button background, if this state sets one.
	pub fn background(self) -> Option<&'static str> {
		match self {
			SubmitState::Idle => Some("#000"),
			SubmitState::Sending => None,
			SubmitState::Sent => Some("#4CAF50"),
		}
	}

	pub fn disabled(self) -> bool {
		self != SubmitState::Idle
	}

	/// How long this state lasts before the next one, if it advances on its own.
	pub fn hold(self) -> Option<(Duration, SubmitState)> {
		match self {
			SubmitState::Idle => None,
			SubmitState::Sending => Some((Duration::from_secs(2), SubmitState::Sent)),
			SubmitState::Sent => Some((Duration::from_secs(3), SubmitState::Idle)),
		}
	}
}

fn enter(form: HtmlFormElement, button: HtmlButtonElement, state: SubmitState) {
	button.set_text_content(Some(state.label()));
	button.set_disabled(state.disabled());
	if let Some(bg) = state.background() {
		let _ = button.style().set_property("background", bg);
	}
	if state == SubmitState::Sent {
		form.reset();
	}
	if let Some((delay, next)) = state.hold() {
		set_timeout(move || enter(form, button, next), delay);
	}
}

pub fn install(document: &Document) -> Result<ListenerHandle, FxError> {
	let form: HtmlFormElement = document
		.query_selector(".contact-form")?
		.and_then(|el| el.dyn_into().ok())
		.ok_or_else(|| FxError::MissingContainer(".contact-form".into()))?;

	let form_submit = form.clone();
	dom::listen(&form, "submit", move |ev: Event| {
		ev.prevent_default();
		let button = form_submit
			.query_selector("button[type=\"submit\"]")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
		if let Some(button) = button {
			enter(form_submit.clone(), button, SubmitState::Sending);
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn states_cycle_back_to_idle() {
		let mut state = SubmitState::Sending;
		let mut total = Duration::ZERO;
		while let Some((delay, next)) = state.hold() {
			total += delay;
			state = next;
		}
		assert_eq!(state, SubmitState::Idle);
		assert_eq!(total, Duration::from_secs(5));
	}

	#[test]
	fn button_only_enabled_when_idle() {
		assert!(!SubmitState::Idle.disabled());
		assert!(SubmitState::Sending.disabled());
		assert!(SubmitState::Sent.disabled());
	}

	#[test]
	fn sent_state_is_green() {
		assert_eq!(SubmitState::Sent.background(), Some("#4CAF50"));
		assert_eq!(SubmitState::Sent.label(), "¡Mensaje enviado!");
	}
}
