//! Scripted gateway for host-side tests.
//!
//! Records every request, captures stdout, and replays queued input, directory
//! records and process results. `terminate` unwinds with a [`Terminated`]
//! payload instead of returning.

use std::{
    collections::VecDeque,
    panic::{self, AssertUnwindSafe},
    string::String,
    vec::Vec,
};

use ulib::{
    DirEntryInfo, ExecFormat, Gateway, Handle, ProcessId, StringSlice, SysResult, SystemError,
    data::{STDERR, STDOUT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminated(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Read,
    Open(Vec<u8>),
    Close(Handle),
    OpenDir(Vec<u8>),
    ReadDir(Handle),
    CloseDir(Handle),
    Fork,
    Exec {
        path: Vec<u8>,
        args: Option<Vec<u8>>,
        format: ExecFormat,
    },
    Wait(ProcessId),
    Terminate(u32),
    DriveName,
    DriveNumber,
    ChangeDrive(Vec<u8>),
}

pub struct MockGateway {
    pub input: VecDeque<Vec<u8>>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub requests: Vec<Request>,
    /// `(has_more, entry)` pairs; an exhausted script reports no more entries.
    pub dir_script: VecDeque<(bool, DirEntryInfo)>,
    pub open_dir_result: SysResult<Handle>,
    pub fork_result: SysResult<ProcessId>,
    pub exec_error: SystemError,
    pub wait_result: SysResult<u32>,
    pub drive_name: SysResult<Vec<u8>>,
    pub drive_number: SysResult<u32>,
    pub change_drive_result: u32,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            stdout: Vec::new(),
            stderr: Vec::new(),
            requests: Vec::new(),
            dir_script: VecDeque::new(),
            open_dir_result: Ok(Handle::new(5)),
            fork_result: Ok(ProcessId::new(7)),
            exec_error: SystemError::NoSuchEntity,
            wait_result: Ok(0),
            drive_name: Ok(b"A".to_vec()),
            drive_number: Ok(1),
            change_drive_result: 2,
        }
    }

    pub fn push_input(&mut self, line: &[u8]) {
        self.input.push_back(line.to_vec());
    }

    pub fn push_entry(&mut self, has_more: bool, entry: DirEntryInfo) {
        self.dir_script.push_back((has_more, entry));
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn take_stdout(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.stdout)
    }

    pub fn count(&self, matches: impl Fn(&Request) -> bool) -> usize {
        self.requests.iter().filter(|r| matches(r)).count()
    }
}

/// Runs `f` and returns the exit code if it terminated the process.
pub fn run_until_terminated<R>(f: impl FnOnce() -> R) -> Result<R, Terminated> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Terminated>() {
            Ok(terminated) => Err(*terminated),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

impl Gateway for MockGateway {
    fn write(&mut self, handle: Handle, buf: &[u8]) -> SysResult<usize> {
        match handle {
            STDOUT => self.stdout.extend_from_slice(buf),
            STDERR => self.stderr.extend_from_slice(buf),
            _ => return Err(SystemError::BadFileDescriptor),
        }
        Ok(buf.len())
    }

    fn read(&mut self, _handle: Handle, buf: &mut [u8]) -> SysResult<usize> {
        self.requests.push(Request::Read);
        let Some(line) = self.input.pop_front() else {
            return Ok(0);
        };
        let n = line.len().min(buf.len());
        buf[..n].copy_from_slice(&line[..n]);
        Ok(n)
    }

    fn open(&mut self, path: StringSlice<'_>) -> SysResult<Handle> {
        self.requests.push(Request::Open(path.as_bytes().to_vec()));
        Err(SystemError::NoSuchEntity)
    }

    fn close(&mut self, handle: Handle) -> SysResult<()> {
        self.requests.push(Request::Close(handle));
        Ok(())
    }

    fn open_dir(&mut self, path: StringSlice<'_>) -> SysResult<Handle> {
        self.requests.push(Request::OpenDir(path.as_bytes().to_vec()));
        self.open_dir_result
    }

    fn read_dir(&mut self, dir: Handle, entry: &mut DirEntryInfo) -> SysResult<bool> {
        self.requests.push(Request::ReadDir(dir));
        match self.dir_script.pop_front() {
            Some((has_more, next)) => {
                *entry = next;
                Ok(has_more)
            }
            None => Ok(false),
        }
    }

    fn close_dir(&mut self, dir: Handle) -> SysResult<()> {
        self.requests.push(Request::CloseDir(dir));
        Ok(())
    }

    fn fork(&mut self) -> SysResult<ProcessId> {
        self.requests.push(Request::Fork);
        self.fork_result
    }

    fn exec(
        &mut self,
        path: StringSlice<'_>,
        args: Option<StringSlice<'_>>,
        format: ExecFormat,
    ) -> SystemError {
        self.requests.push(Request::Exec {
            path: path.as_bytes().to_vec(),
            args: args.map(|a| a.as_bytes().to_vec()),
            format,
        });
        self.exec_error
    }

    fn wait(&mut self, pid: ProcessId) -> SysResult<u32> {
        self.requests.push(Request::Wait(pid));
        self.wait_result
    }

    fn terminate(&mut self, code: u32) -> ! {
        self.requests.push(Request::Terminate(code));
        panic::panic_any(Terminated(code))
    }

    fn current_drive_name(&mut self, buf: &mut [u8; 8]) -> SysResult<usize> {
        self.requests.push(Request::DriveName);
        let name = self.drive_name.clone()?;
        let n = name.len().min(buf.len());
        buf[..n].copy_from_slice(&name[..n]);
        Ok(n)
    }

    fn current_drive_number(&mut self) -> SysResult<u32> {
        self.requests.push(Request::DriveNumber);
        self.drive_number
    }

    fn change_drive(&mut self, name: StringSlice<'_>) -> u32 {
        self.requests.push(Request::ChangeDrive(name.as_bytes().to_vec()));
        self.change_drive_result
    }
}
