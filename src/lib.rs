// SPDX-License-Identifier: MPL-2.0
//! `story_lens` is the core of a stories viewer: per-owner story groups played
//! back as timed segments with pause/resume, tap zones and keyboard
//! navigation.
//!
//! The [`playback`] controller and [`navigation`] resolver are synchronous and
//! clock-free; [`session`] drives them with tokio timers and reports back to
//! the host through [`session::SessionObserver`].

#![doc(html_root_url = "https://docs.rs/story_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod navigation;
pub mod playback;
pub mod session;
pub mod story;

#[cfg(test)]
mod test_utils;
