#![no_std]

#[cfg(test)]
extern crate std;

pub mod data;
pub mod error;
pub mod files;
pub mod gateway;
pub mod io;
pub mod logger;
pub mod syscalls;

pub use data::{ExecFormat, Handle, ProcessId, StringSlice};
pub use error::{SysResult, SystemError};
pub use files::{DirEntryInfo, DirEntryType};
pub use gateway::Gateway;
pub use syscalls::Syscalls;
