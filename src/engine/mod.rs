// Engine modules: frame driver, input, physics

pub mod game_loop;
pub mod input;
pub mod physics;
