pub mod extract;

pub use extract::{TriviaJson, TriviaPath};
