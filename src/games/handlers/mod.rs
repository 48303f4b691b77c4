pub mod clues;
pub mod game;
pub mod guesses;
pub mod http;
pub mod responses;
