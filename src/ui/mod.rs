// src/ui/mod.rs
pub mod dashboard;
pub mod detail;
pub mod upload;
