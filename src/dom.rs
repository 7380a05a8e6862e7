//! Thin ownership layer over browser listeners and animation frames.
//!
//! Every registration made by this crate is held by a value: dropping a
//! [`ListenerHandle`] removes its listener and dropping a [`FrameLoop`] stops
//! its animation. Page-lifetime behaviour is opted into explicitly by keeping
//! those values alive (see [`crate::PageEffects::persist`]).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
	ScrollToOptions, Window,
};

use crate::error::FxError;

pub fn window() -> Result<Window, FxError> {
	web_sys::window().ok_or(FxError::NoDocument)
}

pub fn document() -> Result<Document, FxError> {
	window()?.document().ok_or(FxError::NoDocument)
}

/// First element matching `selector`.
pub fn query(document: &Document, selector: &str) -> Result<HtmlElement, FxError> {
	document
		.query_selector(selector)?
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.ok_or_else(|| FxError::MissingContainer(selector.to_string()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, FxError> {
	let list = document.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect())
}

/// Vertical scroll offset of the window.
pub fn scroll_y(window: &Window) -> f64 {
	window.scroll_y().unwrap_or(0.0)
}

/// Viewport size in CSS pixels.
pub fn viewport(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Smoothly scrolls the window so that `top` is at the top of the viewport.
pub fn smooth_scroll_to(window: &Window, top: f64) {
	let opts = ScrollToOptions::new();
	opts.set_top(top);
	opts.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&opts);
}

/// Appends a `<style>` element with `css` to the document head.
pub fn inject_style(document: &Document, css: &str) -> Result<Element, FxError> {
	let style = document.create_element("style")?;
	style.set_text_content(Some(css));
	document
		.head()
		.ok_or(FxError::NoDocument)?
		.append_child(&style)?;
	Ok(style)
}

/// An event listener that is removed when dropped.
pub struct ListenerHandle {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
	fn register(
		target: &EventTarget,
		event: &'static str,
		callback: Closure<dyn FnMut(Event)>,
		options: Option<&AddEventListenerOptions>,
	) -> Result<Self, FxError> {
		let function: &js_sys::Function = callback.as_ref().unchecked_ref();
		match options {
			Some(opts) => target
				.add_event_listener_with_callback_and_add_event_listener_options(
					event, function, opts,
				)?,
			None => target.add_event_listener_with_callback(event, function)?,
		}
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for ListenerHandle {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

fn typed<E: JsCast + 'static>(mut handler: impl FnMut(E) + 'static) -> Closure<dyn FnMut(Event)> {
	Closure::new(move |ev: Event| {
		if let Ok(ev) = ev.dyn_into::<E>() {
			handler(ev);
		}
	})
}

/// Registers `handler` for `event` on `target`.
pub fn listen<E: JsCast + 'static>(
	target: &EventTarget,
	event: &'static str,
	handler: impl FnMut(E) + 'static,
) -> Result<ListenerHandle, FxError> {
	ListenerHandle::register(target, event, typed(handler), None)
}

/// Like [`listen`], but marks the listener passive (scroll and touch handlers).
pub fn listen_passive<E: JsCast + 'static>(
	target: &EventTarget,
	event: &'static str,
	handler: impl FnMut(E) + 'static,
) -> Result<ListenerHandle, FxError> {
	let opts = AddEventListenerOptions::new();
	opts.set_passive(true);
	ListenerHandle::register(target, event, typed(handler), Some(&opts))
}

/// A callback invoked once per display refresh until cancelled.
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	pending: Rc<Cell<Option<i32>>>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(callback.as_ref().unchecked_ref())
		.ok()
}

impl FrameLoop {
	/// Schedules `frame` for the next refresh and every refresh after it.
	pub fn start(mut frame: impl FnMut() + 'static) -> Result<Self, FxError> {
		let running = Rc::new(Cell::new(true));
		let pending = Rc::new(Cell::new(None));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let (running_cb, pending_cb, callback_cb) =
			(running.clone(), pending.clone(), callback.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_cb.set(None);
			if !running_cb.get() {
				return;
			}
			frame();
			if let Some(ref cb) = *callback_cb.borrow() {
				pending_cb.set(request_frame(cb));
			}
		}));

		let id = match *callback.borrow() {
			Some(ref cb) => request_frame(cb),
			None => None,
		};
		if id.is_none() {
			callback.borrow_mut().take();
			return Err(FxError::Js("requestAnimationFrame unavailable".into()));
		}
		pending.set(id);

		Ok(Self {
			running,
			pending,
			callback,
		})
	}

	/// Stops rescheduling and drops any frame already queued.
	pub fn cancel(&self) {
		self.running.set(false);
		if let (Some(id), Some(win)) = (self.pending.take(), web_sys::window()) {
			let _ = win.cancel_animation_frame(id);
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
		// Break the closure's reference to itself.
		self.callback.borrow_mut().take();
	}
}
