#[cfg(target_arch = "x86")]
use core::arch::asm;

use crate::{
    data::{ExecFormat, Handle, ProcessId, StringSlice},
    error::{SysResult, SystemError, result_from_code},
    files::DirEntryInfo,
    gateway::Gateway,
};

pub const SYS_TERMINATE: u32 = 0x00;
pub const SYS_FORK: u32 = 0x01;
pub const SYS_EXEC: u32 = 0x02;
pub const SYS_WAIT_PID: u32 = 0x09;
pub const SYS_OPEN: u32 = 0x10;
pub const SYS_CLOSE: u32 = 0x11;
pub const SYS_READ: u32 = 0x12;
pub const SYS_WRITE: u32 = 0x13;
pub const SYS_OPEN_DIR: u32 = 0x1a;
pub const SYS_READ_DIR: u32 = 0x1b;
pub const SYS_CLOSE_DIR: u32 = 0x1c;
pub const SYS_SET_DRIVE: u32 = 0x21;
pub const SYS_GET_DRIVE_NAME: u32 = 0x22;
pub const SYS_GET_DRIVE_NUMBER: u32 = 0x23;

#[inline(always)]
#[cfg(target_arch = "x86")]
pub fn syscall(method: u32, arg0: u32, arg1: u32, arg2: u32) -> u32 {
    let ret: u32;
    unsafe {
        asm!(
            "xchg ebx, {arg0}",
            "int 0x2b",
            "xchg ebx, {arg0}",
            arg0 = inout(reg) arg0 => _,
            inlateout("eax") method => ret,
            inlateout("ecx") arg1 => _,
            inlateout("edx") arg2 => _,
        );
    }
    ret
}

/// There is no trap outside the target; every request fails.
#[cfg(not(target_arch = "x86"))]
pub fn syscall(_method: u32, _arg0: u32, _arg1: u32, _arg2: u32) -> u32 {
    SystemError::Unknown.to_code()
}

fn addr<T>(ptr: *const T) -> u32 {
    ptr as usize as u32
}

pub fn terminate(code: u32) -> ! {
    syscall(SYS_TERMINATE, code, 0, 0);
    unreachable!()
}

pub fn write(handle: Handle, buf: &[u8]) -> SysResult<usize> {
    let code = syscall(SYS_WRITE, handle.as_u32(), addr(buf.as_ptr()), buf.len() as u32);
    result_from_code(code).map(|n| n as usize)
}

pub fn read(handle: Handle, buf: &mut [u8]) -> SysResult<usize> {
    let code = syscall(SYS_READ, handle.as_u32(), addr(buf.as_mut_ptr()), buf.len() as u32);
    result_from_code(code).map(|n| (n as usize).min(buf.len()))
}

pub fn open(path: StringSlice<'_>) -> SysResult<Handle> {
    let code = syscall(SYS_OPEN, path.descriptor_addr() as u32, 0, 0);
    result_from_code(code).map(Handle::new)
}

pub fn close(handle: Handle) -> SysResult<()> {
    result_from_code(syscall(SYS_CLOSE, handle.as_u32(), 0, 0)).map(|_| ())
}

pub fn open_dir(path: StringSlice<'_>) -> SysResult<Handle> {
    let code = syscall(SYS_OPEN_DIR, path.descriptor_addr() as u32, 0, 0);
    result_from_code(code).map(Handle::new)
}

pub fn read_dir(dir: Handle, entry: &mut DirEntryInfo) -> SysResult<bool> {
    let code = syscall(SYS_READ_DIR, dir.as_u32(), addr(entry as *mut DirEntryInfo), 0);
    result_from_code(code).map(|has_more| has_more != 0)
}

pub fn close_dir(dir: Handle) -> SysResult<()> {
    result_from_code(syscall(SYS_CLOSE_DIR, dir.as_u32(), 0, 0)).map(|_| ())
}

pub fn fork() -> SysResult<ProcessId> {
    result_from_code(syscall(SYS_FORK, 0, 0, 0)).map(ProcessId::new)
}

pub fn exec(
    path: StringSlice<'_>,
    args: Option<StringSlice<'_>>,
    format: ExecFormat,
) -> SystemError {
    let args_addr = args.as_ref().map_or(0, |args| args.descriptor_addr() as u32);
    let code = syscall(SYS_EXEC, path.descriptor_addr() as u32, args_addr, format.code());
    match result_from_code(code) {
        Err(e) => e,
        // Exec came back without reporting a failure; still not a running image.
        Ok(_) => SystemError::Unknown,
    }
}

pub fn wait_pid(pid: ProcessId) -> SysResult<u32> {
    let mut status: u32 = 0;
    let code = syscall(SYS_WAIT_PID, pid.as_u32(), addr(&mut status as *mut u32), 0);
    result_from_code(code).map(|_| status)
}

pub fn set_drive(name: StringSlice<'_>) -> u32 {
    syscall(SYS_SET_DRIVE, name.descriptor_addr() as u32, 0, 0)
}

pub fn get_drive_name(buf: &mut [u8; 8]) -> SysResult<usize> {
    let code = syscall(SYS_GET_DRIVE_NAME, addr(buf.as_mut_ptr()), 0, 0);
    result_from_code(code).map(|len| (len as usize).min(buf.len()))
}

pub fn get_drive_number() -> SysResult<u32> {
    result_from_code(syscall(SYS_GET_DRIVE_NUMBER, 0, 0, 0))
}

/// The gateway backed by the real trap.
#[derive(Debug, Default, Clone, Copy)]
pub struct Syscalls;

impl Gateway for Syscalls {
    fn write(&mut self, handle: Handle, buf: &[u8]) -> SysResult<usize> {
        write(handle, buf)
    }

    fn read(&mut self, handle: Handle, buf: &mut [u8]) -> SysResult<usize> {
        read(handle, buf)
    }

    fn open(&mut self, path: StringSlice<'_>) -> SysResult<Handle> {
        open(path)
    }

    fn close(&mut self, handle: Handle) -> SysResult<()> {
        close(handle)
    }

    fn open_dir(&mut self, path: StringSlice<'_>) -> SysResult<Handle> {
        open_dir(path)
    }

    fn read_dir(&mut self, dir: Handle, entry: &mut DirEntryInfo) -> SysResult<bool> {
        read_dir(dir, entry)
    }

    fn close_dir(&mut self, dir: Handle) -> SysResult<()> {
        close_dir(dir)
    }

    fn fork(&mut self) -> SysResult<ProcessId> {
        fork()
    }

    fn exec(
        &mut self,
        path: StringSlice<'_>,
        args: Option<StringSlice<'_>>,
        format: ExecFormat,
    ) -> SystemError {
        exec(path, args, format)
    }

    fn wait(&mut self, pid: ProcessId) -> SysResult<u32> {
        wait_pid(pid)
    }

    fn terminate(&mut self, code: u32) -> ! {
        terminate(code)
    }

    fn current_drive_name(&mut self, buf: &mut [u8; 8]) -> SysResult<usize> {
        get_drive_name(buf)
    }

    fn current_drive_number(&mut self) -> SysResult<u32> {
        get_drive_number()
    }

    fn change_drive(&mut self, name: StringSlice<'_>) -> u32 {
        set_drive(name)
    }
}

#[cfg(all(test, not(target_arch = "x86")))]
mod tests {
    use super::*;

    #[test]
    fn requests_fail_without_a_trap() {
        let mut gateway = Syscalls;
        assert_eq!(gateway.write(crate::data::STDOUT, b"hi"), Err(SystemError::Unknown));
        assert_eq!(gateway.open(StringSlice::new(b"A:\\X")), Err(SystemError::Unknown));
        assert_eq!(gateway.fork(), Err(SystemError::Unknown));
        assert!(crate::error::is_error_code(gateway.change_drive(StringSlice::new(b"A"))));
    }

    #[test]
    fn failed_exec_reports_its_error() {
        let path = StringSlice::new(b"MYPROG");
        assert_eq!(exec(path, None, ExecFormat::Detect), SystemError::Unknown);
    }
}
