//! Running a program: fork, exec in the child, wait in the parent.

use core::convert::Infallible;

use log::{debug, error, warn};
use ulib::{
    ExecFormat, Gateway, ProcessId, StringSlice, SysResult, SystemError, io::Ascii, println_to,
};

use crate::input;

/// Exit status of a child whose exec failed.
pub const EXEC_FAILURE_STATUS: u32 = 1;

/// The parent's side of a successful fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned(pub ProcessId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    Completed { pid: ProcessId, status: u32 },
    ForkFailed(SystemError),
    WaitFailed { pid: ProcessId, error: SystemError },
}

/// Forks. The new process runs `child` and never comes back; the parent gets
/// the child's id. `child` cannot produce a value, so it can only end by
/// terminating.
pub fn spawn<G, F>(gateway: &mut G, child: F) -> SysResult<Spawned>
where
    G: Gateway,
    F: FnOnce(&mut G) -> Infallible,
{
    let pid = gateway.fork()?;
    if pid.is_child() {
        match child(gateway) {}
    }
    Ok(Spawned(pid))
}

/// Runs the first token of `line` as a program and waits for it.
pub fn launch<G: Gateway>(
    gateway: &mut G,
    line: &[u8],
    command_end: usize,
    format: ExecFormat,
) -> Launch {
    let path = &line[..command_end];
    let args = input::arguments(line, command_end);

    let pid = match spawn(gateway, |child| exec_child(child, path, args, format)) {
        Ok(Spawned(pid)) => pid,
        Err(e) => {
            error!("fork for {:?} failed: {}", Ascii(path), e);
            println_to!(gateway, "{}: fork failed ({})", Ascii(path), e);
            return Launch::ForkFailed(e);
        }
    };
    debug!("spawned {} for {:?}", pid, Ascii(path));

    match gateway.wait(pid) {
        Ok(status) => {
            debug!("child {} exited with {}", pid, status);
            println_to!(gateway, "[{}] exited with status {}", pid, status);
            Launch::Completed { pid, status }
        }
        Err(e) => {
            warn!("wait on {} failed: {}", pid, e);
            Launch::WaitFailed { pid, error: e }
        }
    }
}

fn exec_child<G: Gateway>(gateway: &mut G, path: &[u8], args: &[u8], format: ExecFormat) -> ! {
    let args = if args.is_empty() { None } else { Some(StringSlice::new(args)) };
    let e = gateway.exec(StringSlice::new(path), args, format);

    error!("exec of {:?} failed: {}", Ascii(path), e);
    println_to!(gateway, "{}: cannot execute ({})", Ascii(path), e);
    gateway.terminate(EXEC_FAILURE_STATUS)
}
