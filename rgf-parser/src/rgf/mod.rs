//! Main module for rgf library functionality

pub mod extraction;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod patching;
pub mod records;
pub mod testing;
pub mod token;
