pub mod assets;
pub mod generator;
pub mod jokes;
pub mod session;
