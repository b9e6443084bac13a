//! Rates a free-text description of a day. The text is split into activities, every activity is
//! put into a life category, categories are scored and combined into a weighted daily rating with
//! highlights and suggestions. Ratings are appended to a plain-text log per day.
//!

pub mod cli;
pub mod rating;
pub mod storage;
pub mod utils;
