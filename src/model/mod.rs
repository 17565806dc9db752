pub mod app_state;
pub mod configuration;
pub mod draw_record;
pub mod errors;
pub mod game;
