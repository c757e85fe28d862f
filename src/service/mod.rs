pub mod pagination;
pub mod quiz;
pub mod trivia;

pub use trivia::TriviaService;
