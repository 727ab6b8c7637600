//! Collects dream and journal sections from dated daily notes.
//!
//! A vault holds one `YYYY-MM-DD.md` note per day. For every note inside the
//! requested date range, level-2 sections whose heading is a recognized dream
//! or journal label are gathered into dated blocks, and all blocks are written
//! to a single markdown document in chronological order.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod utils;
