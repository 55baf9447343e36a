use log::info;
use ulib::Gateway;

pub const EXIT_STATUS: u32 = 0;

pub fn run<G: Gateway>(gateway: &mut G) -> ! {
    info!("shell exiting");
    gateway.terminate(EXIT_STATUS)
}
