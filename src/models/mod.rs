// src/models/mod.rs

pub mod guess;
pub mod monster;
pub mod quiz;
