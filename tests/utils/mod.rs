#![allow(dead_code)]

pub mod factories;
pub mod fake_tmdb;
pub mod gated_client;
