// src/lib.rs

pub mod config;
pub mod controllers;
pub mod draw;
pub mod models;
pub mod services;
pub mod views;
