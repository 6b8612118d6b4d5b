//! device-mockup: frame app screenshots in device bezels
//!
//! This library guesses which device a screenshot came from by its pixel
//! dimensions, confirms the choice interactively, and composites the
//! screenshot over the device's bezel image into a single PNG.
//!
//! Flow: [`device::Catalog`] → [`device::find_matches`] →
//! [`select::resolve`] → [`mockup::create_mockup`], driven end to end by
//! [`session::run_session`].

pub mod config;
pub mod device;
pub mod error;
pub mod mockup;
pub mod model;
pub mod progress;
pub mod select;
pub mod session;
pub mod util;
