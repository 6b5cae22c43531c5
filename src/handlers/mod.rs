// src/handlers/mod.rs

pub mod auth;
pub mod dashboard;
pub mod generate;
pub mod profile;
pub mod quiz;
pub mod subject;
pub mod topic;
