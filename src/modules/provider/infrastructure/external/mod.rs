pub mod jikan;

pub use jikan::{FetchFailure, JikanClient};
