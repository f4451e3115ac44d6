pub mod matching;
pub mod points;
