//! Top-down real-time dungeon crawler simulation.
//!
//! The library owns everything that decides what happens: map generation,
//! collision, entity placement, the per-tick systems and the session state
//! machine. Drawing, windowing and device input stay outside; they read
//! through [`queries`] and feed [`input::TickInput`] into [`engine::GameEngine`].

pub mod collision;
pub mod components;
pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod engine;
pub mod error;
pub mod events;
pub mod game_loop;
pub mod grid;
pub mod input;
pub mod queries;
pub mod spawning;
pub mod systems;
pub mod tile;
pub mod vfx;
