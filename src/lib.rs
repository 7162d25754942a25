//! # Quran Bot
//!
//! A Discord bot that reads Quran verses from a PostgreSQL database and posts them to a channel.
//!
//! ## Features
//! - `/quran [chapter] [verse_start] [verse_end]` posts a chapter or a range of verses
//! - `/say <text>` echoes text back with the sender's name
//! - A daily post of a random chapter to a well-known channel
//! - Health check endpoints for the hosting environment

/// Discord command parsing, dispatch and event handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Verse model, store trait and PostgreSQL connection
pub mod database;
/// Background services: verse pipeline, daily post, scheduler and health checks
pub mod services;
/// Utility functions for verse ranges, formatting, validation and logging
pub mod utils;
