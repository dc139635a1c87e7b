pub mod assets;
pub mod canvas;
pub mod compute;
pub mod config;
pub mod controller;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod scheduler;
