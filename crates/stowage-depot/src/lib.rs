//! Bounded resource storage and timed conversion.
//!
//! [`Area`] is a capacity-bounded resource counter; [`Converter`] pairs
//! an input and an output area with a timed state machine that consumes
//! a demanded batch, waits out a conversion interval, and deposits a
//! supplied batch. Both are plain synchronous state machines driven by
//! the caller (the converter via [`Converter::update`] with elapsed
//! time) — no clocks, no threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod converter;
pub mod error;

pub use area::Area;
pub use converter::{Converter, ConverterConfig};
pub use error::DepotError;
