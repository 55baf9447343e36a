use core::{fmt, marker::PhantomData, slice};

use static_assertions::const_assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Handle(u32);

pub const STDIN: Handle = Handle(0);
pub const STDOUT: Handle = Handle(1);
pub const STDERR: Handle = Handle(2);

impl Handle {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Process id as returned by fork. Zero is only ever seen by the new child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ProcessId(u32);

impl ProcessId {
    pub const CHILD: Self = Self(0);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    pub const fn is_child(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the kernel should interpret an executable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ExecFormat {
    Detect = 0,
    Bin = 1,
    Elf = 2,
    Com = 3,
    Dos = 4,
}

impl ExecFormat {
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Pointer and length pair handed to the kernel by address.
///
/// There is no terminator: the kernel reads exactly `length` bytes. The slice
/// can only be built from a borrowed byte slice, and the lifetime keeps it from
/// outliving the buffer it points into.
#[derive(Clone, Copy)]
#[repr(C, packed)]
pub struct StringSlice<'a> {
    addr: *const u8,
    length: usize,
    _buffer: PhantomData<&'a [u8]>,
}

const_assert_eq!(
    core::mem::size_of::<StringSlice<'static>>(),
    2 * core::mem::size_of::<usize>()
);

impl<'a> StringSlice<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            addr: bytes.as_ptr(),
            length: bytes.len(),
            _buffer: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        let (addr, length) = (self.addr, self.length);
        // Built from a `&'a [u8]` in `new`, so the range is valid for 'a.
        unsafe { slice::from_raw_parts(addr, length) }
    }

    /// Address of the slice descriptor itself, as passed in a trap register.
    pub fn descriptor_addr(&self) -> usize {
        self as *const Self as usize
    }
}

impl fmt::Debug for StringSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StringSlice")
            .field(&crate::io::Ascii(self.as_bytes()))
            .finish()
    }
}
