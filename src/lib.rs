//! glimpse: a terminal RSVP speed reader.
//!
//! Text is split into ASCII-letter runs and single CJK ideographs
//! ([`reading::tokenize`]) and flashed one token at a time by a
//! [`reading::PlaybackController`] at a configurable words-per-minute rate.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;
