//! Page shell effects surrounding the particle fields.
//!
//! Two kinds live here:
//! - overlay widgets rendered with Leptos ([`ScrollProgress`], [`BackToTop`],
//!   [`Preloader`], [`CustomCursor`])
//! - behaviours attached to markup the page already has, each exposed as an
//!   `install` function returning the handles that keep it alive
//!
//! The pure pieces (thresholds, offsets, filter matching) are plain functions
//! so they can be tested without a browser.

pub mod about;
mod back_to_top;
pub mod contact;
mod cursor;
pub mod dev_elements;
pub mod filters;
pub mod navigation;
pub mod parallax;
mod preloader;
pub mod reveal;
mod scroll_progress;
pub mod smooth_scroll;

pub use back_to_top::{BackToTop, should_show};
pub use cursor::{CustomCursor, enabled_for};
pub use preloader::{Preloader, advance};
pub use scroll_progress::{ScrollProgress, scroll_ratio};
