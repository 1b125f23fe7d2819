mod client;
mod render;

pub use client::AnkiConnectClient;
pub use render::{DARK, LIGHT, Palette, render};
