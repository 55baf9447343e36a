use log::{debug, warn};
use ulib::{Gateway, StringSlice, error::result_from_code, io::Ascii};

pub const DRIVE_NAME_CAPACITY: usize = 8;
pub const DRIVE_SEPARATOR: u8 = b':';

/// The active drive. Only a drive switch changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveState {
    current_drive_number: u32,
    current_drive_name: [u8; DRIVE_NAME_CAPACITY],
    current_drive_name_length: usize,
}

impl DriveState {
    pub const fn new() -> Self {
        Self {
            current_drive_number: 0,
            current_drive_name: [0; DRIVE_NAME_CAPACITY],
            current_drive_name_length: 0,
        }
    }

    /// Starts from whatever drive the process inherited.
    pub fn inherit<G: Gateway>(gateway: &mut G) -> Self {
        let mut state = Self::new();
        if let Ok(number) = gateway.current_drive_number() {
            state.current_drive_number = number;
        }
        let mut name = [0; DRIVE_NAME_CAPACITY];
        if let Ok(len) = gateway.current_drive_name(&mut name) {
            state.set_name(&name[..len.min(DRIVE_NAME_CAPACITY)]);
        }
        debug!(
            "inherited drive {} ({})",
            state.current_drive_number,
            Ascii(state.name())
        );
        state
    }

    pub fn number(&self) -> u32 {
        self.current_drive_number
    }

    pub fn name(&self) -> &[u8] {
        &self.current_drive_name[..self.current_drive_name_length]
    }

    fn set_name(&mut self, name: &[u8]) {
        let len = name.len().min(DRIVE_NAME_CAPACITY);
        self.current_drive_name[..len].copy_from_slice(&name[..len]);
        self.current_drive_name_length = len;
    }

    /// Asks the kernel to change drives and stores its answer as-is, error
    /// codes included. The cached name only follows a successful switch.
    pub fn switch<G: Gateway>(&mut self, gateway: &mut G, name: &[u8]) -> u32 {
        let result = gateway.change_drive(StringSlice::new(name));
        self.current_drive_number = result;
        match result_from_code(result) {
            Ok(number) => {
                debug!("switched to drive {} ({})", number, Ascii(name));
                self.set_name(name);
            }
            Err(e) => warn!("drive switch to {:?} failed: {}", Ascii(name), e),
        }
        result
    }
}

impl Default for DriveState {
    fn default() -> Self {
        Self::new()
    }
}

/// The drive name of a `NAME:` token. Empty tokens never qualify.
pub fn drive_switch_name(token: &[u8]) -> Option<&[u8]> {
    match token.split_last() {
        Some((&DRIVE_SEPARATOR, name)) => Some(name),
        _ => None,
    }
}
