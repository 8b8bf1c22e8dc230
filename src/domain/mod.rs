pub mod actor;
pub mod dice;
pub mod enemy;
pub mod geom;
pub mod mover;
pub mod player;
pub mod square;
pub mod vortex;
