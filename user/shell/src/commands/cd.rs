use ulib::{Gateway, println_to};

pub fn run<G: Gateway>(gateway: &mut G) {
    println_to!(gateway, "cd: unimplemented");
}
