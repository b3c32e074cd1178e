//! ECS Components для участников сцены
//!
//! Организация по доменам:
//! - actor: intruder (цель охраны), объём тела (collision extent)
//! - world: статичные препятствия для line-of-sight

pub mod actor;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use world::*;
