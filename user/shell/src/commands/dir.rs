use log::{debug, warn};
use ulib::{
    DirEntryInfo, Gateway, StringSlice, SysResult, io::Ascii, print_bytes_to, println_to,
};

use crate::drive::DriveState;

/// `"  NAME.... EXT\n"`: two spaces, 8-byte name, a gap, 3-byte extension.
pub const ENTRY_LINE_LEN: usize = 15;

const NAME_COLUMN: usize = 2;
const EXT_COLUMN: usize = 11;

/// Lists the root of the active drive and returns how many entries it printed.
pub fn run<G: Gateway>(gateway: &mut G, drive: &DriveState) -> SysResult<usize> {
    let dir = match gateway.open_dir(StringSlice::new(b"")) {
        Ok(dir) => dir,
        Err(e) => {
            warn!("open_dir on drive {} failed: {}", drive.number(), e);
            println_to!(gateway, "dir: {}", e);
            return Err(e);
        }
    };

    println_to!(gateway, " Directory of {}:\\", Ascii(drive.name()));

    let mut count = 0;
    loop {
        let mut entry = DirEntryInfo::empty();
        match gateway.read_dir(dir, &mut entry) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!("read_dir stopped early: {}", e);
                break;
            }
        }
        print_bytes_to!(gateway, &render_entry(&entry));
        count += 1;
    }

    if let Err(e) = gateway.close_dir(dir) {
        debug!("close_dir failed: {}", e);
    }

    println_to!(gateway, "{:>9} file(s)", count);
    Ok(count)
}

pub fn render_entry(entry: &DirEntryInfo) -> [u8; ENTRY_LINE_LEN] {
    let mut line = [b' '; ENTRY_LINE_LEN];
    let name = entry.name();
    let ext = entry.ext();
    for (dst, &src) in line[NAME_COLUMN..].iter_mut().zip(name.iter()) {
        *dst = printable(src);
    }
    for (dst, &src) in line[EXT_COLUMN..].iter_mut().zip(ext.iter()) {
        *dst = printable(src);
    }
    line[ENTRY_LINE_LEN - 1] = b'\n';
    line
}

fn printable(b: u8) -> u8 {
    if b.is_ascii_graphic() { b } else { b' ' }
}
