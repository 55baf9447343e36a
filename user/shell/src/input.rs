use log::debug;
use ulib::{Gateway, data::STDIN};

pub const LINE_CAPACITY: usize = 512;

/// The one input line, reused every prompt cycle.
pub struct LineBuffer {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Reads the next line from stdin. A failed read counts as empty input.
    pub fn fill<G: Gateway>(&mut self, gateway: &mut G) -> usize {
        self.len = match gateway.read(STDIN, &mut self.bytes) {
            Ok(n) => n.min(LINE_CAPACITY),
            Err(e) => {
                debug!("stdin read failed: {}", e);
                0
            }
        };
        self.len
    }

    /// Only the bytes of the current line; anything past it is stale.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Offset of the first space or newline, or the line length if there is none.
pub fn command_end(line: &[u8]) -> usize {
    line.iter()
        .position(|&b| b == b' ' || b == b'\n')
        .unwrap_or(line.len())
}

/// Everything after the command token, without leading spaces or the line
/// terminator.
pub fn arguments(line: &[u8], command_end: usize) -> &[u8] {
    let mut rest = line.get(command_end..).unwrap_or(&[]);
    while let [b' ', tail @ ..] = rest {
        rest = tail;
    }
    while let [head @ .., b'\n' | b'\r' | b' '] = rest {
        rest = head;
    }
    rest
}
