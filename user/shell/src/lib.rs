//! Drive-aware command shell.
//!
//! Reads a line, runs it as a builtin, a drive switch or an executable, and
//! prompts again. All kernel access goes through a [`ulib::Gateway`].

#![no_std]

#[cfg(test)]
extern crate std;

pub mod commands;
pub mod config;
pub mod drive;
pub mod input;
pub mod launch;
mod repl;

#[cfg(test)]
mod mock;

pub use repl::{Shell, Step};
