//! Built-in job handler implementations.

pub mod folder_move;
