pub mod error;
pub mod player_key;
