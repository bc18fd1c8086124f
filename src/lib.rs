//! Tabbed weather panel for the Kanto region, built on the JMA public
//! forecast endpoint. Compiled to WebAssembly and rendered client-side
//! with Yew.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
