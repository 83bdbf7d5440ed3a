//! IMDB Insight - Movie Data Cleaning & Ratings Analysis
//!
//! Loads the raw IMDB movie export, cleans it, and derives simple rating
//! insights: grouped averages, a revenue/rating rank correlation, and a set
//! of static chart images.

pub mod charts;
pub mod data;
pub mod stats;
