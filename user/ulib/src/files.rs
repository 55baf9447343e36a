use static_assertions::const_assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirEntryType {
    Empty,
    Directory,
    File,
    Other(u16),
}

impl DirEntryType {
    pub fn code(self) -> u16 {
        match self {
            Self::Empty => 0,
            Self::Directory => 1,
            Self::File => 2,
            Self::Other(code) => code,
        }
    }
}

/// One directory record, filled in place by the read-dir request.
///
/// Names are 8.3: unused bytes are padding and carry no terminator.
#[derive(Clone, Copy)]
#[repr(C, packed)]
pub struct DirEntryInfo {
    pub file_name: [u8; 8],
    pub file_ext: [u8; 3],
    pub file_type: u16,
    pub byte_size: u32,
}

const_assert_eq!(core::mem::size_of::<DirEntryInfo>(), 17);

impl DirEntryInfo {
    pub const fn empty() -> Self {
        Self {
            file_name: [b' '; 8],
            file_ext: [b' '; 3],
            file_type: 0,
            byte_size: 0,
        }
    }

    pub fn new(name: &[u8], ext: &[u8], entry_type: DirEntryType, byte_size: u32) -> Self {
        let mut entry = Self::empty();
        for (dst, src) in entry.file_name.iter_mut().zip(name) {
            *dst = *src;
        }
        for (dst, src) in entry.file_ext.iter_mut().zip(ext) {
            *dst = *src;
        }
        entry.file_type = entry_type.code();
        entry.byte_size = byte_size;
        entry
    }

    pub fn name(&self) -> [u8; 8] {
        self.file_name
    }

    pub fn ext(&self) -> [u8; 3] {
        self.file_ext
    }
}
