use core::fmt::{self, Write};

use crate::{
    data::{Handle, STDERR, STDOUT},
    gateway::Gateway,
    syscalls,
};

/// Formats into one handle of any gateway. Write failures are dropped: there
/// is nowhere left to report them.
pub struct Console<'g, G: Gateway> {
    gateway: &'g mut G,
    handle: Handle,
}

impl<'g, G: Gateway> Console<'g, G> {
    pub fn new(gateway: &'g mut G, handle: Handle) -> Self {
        Self { gateway, handle }
    }

    pub fn stdout(gateway: &'g mut G) -> Self {
        Self::new(gateway, STDOUT)
    }
}

impl<G: Gateway> Write for Console<'_, G> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = self.gateway.write(self.handle, s.as_bytes());
        Ok(())
    }
}

pub fn _print_to<G: Gateway>(gateway: &mut G, args: fmt::Arguments) {
    let _ = Console::stdout(gateway).write_fmt(args);
}

pub fn _print_bytes_to<G: Gateway>(gateway: &mut G, bytes: &[u8]) {
    let _ = gateway.write(STDOUT, bytes);
}

struct Stderr;

impl Write for Stderr {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = syscalls::write(STDERR, s.as_bytes());
        Ok(())
    }
}

pub fn _eprint(args: fmt::Arguments) {
    let _ = Stderr.write_fmt(args);
}

/// Displays raw bytes as ASCII, replacing anything else with `?`.
#[derive(Clone, Copy)]
pub struct Ascii<'a>(pub &'a [u8]);

impl fmt::Display for Ascii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            let c = if b.is_ascii() && !b.is_ascii_control() { b as char } else { '?' };
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Ascii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

#[macro_export]
macro_rules! print_to {
    ($gateway:expr, $($arg:tt)*) => {{
        $crate::io::_print_to($gateway, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! println_to {
    ($gateway:expr) => {
        $crate::print_to!($gateway, "\n")
    };
    ($gateway:expr, $($arg:tt)*) => {{
        $crate::io::_print_to($gateway, format_args!($($arg)*));
        $crate::print_to!($gateway, "\n");
    }};
}

#[macro_export]
macro_rules! print_bytes_to {
    ($gateway:expr, $bytes:expr) => {{
        $crate::io::_print_bytes_to($gateway, $bytes);
    }};
}

#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => {{
        $crate::io::_eprint(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::eprint!("\n")
    };
    ($($arg:tt)*) => {{
        $crate::io::_eprint(format_args!($($arg)*));
        $crate::eprint!("\n");
    }};
}
