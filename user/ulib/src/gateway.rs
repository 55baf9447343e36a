use crate::{
    data::{ExecFormat, Handle, ProcessId, StringSlice},
    error::{SysResult, SystemError},
    files::DirEntryInfo,
};

/// Every kernel request a userland program can make.
///
/// [`crate::Syscalls`] is the real implementation. Programs take
/// `G: Gateway` so they can be driven by a scripted gateway instead.
pub trait Gateway {
    fn write(&mut self, handle: Handle, buf: &[u8]) -> SysResult<usize>;

    /// Blocks until input is available. Input longer than `buf` is truncated.
    fn read(&mut self, handle: Handle, buf: &mut [u8]) -> SysResult<usize>;

    fn open(&mut self, path: StringSlice<'_>) -> SysResult<Handle>;

    fn close(&mut self, handle: Handle) -> SysResult<()>;

    /// An empty path opens the root of the active drive.
    fn open_dir(&mut self, path: StringSlice<'_>) -> SysResult<Handle>;

    /// Fills `entry` and returns whether it holds another record.
    fn read_dir(&mut self, dir: Handle, entry: &mut DirEntryInfo) -> SysResult<bool>;

    fn close_dir(&mut self, dir: Handle) -> SysResult<()>;

    /// Returns [`ProcessId::CHILD`] in the new process and the child's id in
    /// the parent.
    fn fork(&mut self) -> SysResult<ProcessId>;

    /// Replaces the program image. Only returns when the exec failed.
    fn exec(
        &mut self,
        path: StringSlice<'_>,
        args: Option<StringSlice<'_>>,
        format: ExecFormat,
    ) -> SystemError;

    /// Blocks until `pid` exits and returns its exit status.
    fn wait(&mut self, pid: ProcessId) -> SysResult<u32>;

    fn terminate(&mut self, code: u32) -> !;

    fn current_drive_name(&mut self, buf: &mut [u8; 8]) -> SysResult<usize>;

    fn current_drive_number(&mut self) -> SysResult<u32>;

    /// Raw result of the change-drive request: the new drive number, or an
    /// error code with the high bit set.
    fn change_drive(&mut self, name: StringSlice<'_>) -> u32;
}
