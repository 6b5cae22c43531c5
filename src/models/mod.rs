// src/models/mod.rs

pub mod attempt;
pub mod difficulty;
pub mod quiz;
pub mod subject;
pub mod topic;
pub mod user;
