//! ECS components of the simulated game world.
//!
//! Submodules overview:
//! - [`cleanuptimer`] – fire-once countdown that runs a cleanup task
//! - [`designername`] – engine class name of an entity
//! - [`player`] – connected player pawn
//! - [`weapon`] – weapon marker and ownership link

pub mod cleanuptimer;
pub mod designername;
pub mod player;
pub mod weapon;
