pub mod command;
pub mod light_state;
