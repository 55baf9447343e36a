use core::fmt;

/// Error codes returned by the kernel. The high bit of a raw result marks an
/// error; the low 16 bits select the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SystemError {
    Unknown = 0,
    BadFileDescriptor = 1,
    NoSuchDrive = 2,
    NoSuchFileSystem = 3,
    NoSuchEntity = 4,
    NotDirectory = 5,
    NotEmpty = 6,
    BrokenPipe = 7,
    InvalidSeek = 8,
    UnsupportedCommand = 9,
    IOError = 10,
    MaxFilesExceeded = 11,
}

pub type SysResult<T> = Result<T, SystemError>;

const ERROR_FLAG: u32 = 0x8000_0000;

impl SystemError {
    pub fn from_code(code: u32) -> Self {
        match code & 0xffff {
            1 => Self::BadFileDescriptor,
            2 => Self::NoSuchDrive,
            3 => Self::NoSuchFileSystem,
            4 => Self::NoSuchEntity,
            5 => Self::NotDirectory,
            6 => Self::NotEmpty,
            7 => Self::BrokenPipe,
            8 => Self::InvalidSeek,
            9 => Self::UnsupportedCommand,
            10 => Self::IOError,
            11 => Self::MaxFilesExceeded,
            _ => Self::Unknown,
        }
    }

    pub fn to_code(self) -> u32 {
        ERROR_FLAG | self as u32
    }
}

pub fn is_error_code(code: u32) -> bool {
    code & ERROR_FLAG != 0
}

pub fn result_from_code(code: u32) -> SysResult<u32> {
    if is_error_code(code) {
        Err(SystemError::from_code(code))
    } else {
        Ok(code & !ERROR_FLAG)
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Unknown => "unknown error",
            Self::BadFileDescriptor => "bad file descriptor",
            Self::NoSuchDrive => "no such drive",
            Self::NoSuchFileSystem => "no such filesystem",
            Self::NoSuchEntity => "no such file or directory",
            Self::NotDirectory => "not a directory",
            Self::NotEmpty => "directory not empty",
            Self::BrokenPipe => "broken pipe",
            Self::InvalidSeek => "invalid seek",
            Self::UnsupportedCommand => "unsupported command",
            Self::IOError => "i/o error",
            Self::MaxFilesExceeded => "too many open files",
        };
        f.write_str(msg)
    }
}
