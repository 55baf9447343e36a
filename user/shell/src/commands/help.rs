use ulib::{Gateway, println_to};

use super::all;

pub fn run<G: Gateway>(gateway: &mut G) {
    println_to!(gateway, "commands:");
    for command in all() {
        let name = core::str::from_utf8(command.name).unwrap_or("?");
        println_to!(gateway, "  {:<6}- {}", name, command.summary);
    }
    println_to!(gateway, "  X:    - switch to drive X");
    println_to!(gateway, "anything else runs as a program on the active drive");
}
