//! Mock AI engine: synthetic detections, keyword sentiment, keyword
//! extraction, template text generation, readability and a canned
//! multi-modal fusion. All functions are pure apart from the random source
//! they are handed.

pub mod api;
pub mod chart;
pub mod detection;
pub mod error;
pub mod fusion;
pub mod generator;
pub mod keywords;
pub mod lexicon;
pub mod sentiment;
pub mod sequence;
pub mod text;

pub use api::*;
pub use error::StudioError;
pub use sequence::{Channel, Sequencer, Ticket};
