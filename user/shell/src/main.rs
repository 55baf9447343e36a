#![cfg_attr(all(target_arch = "x86", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "x86", target_os = "none"), no_main)]

#[cfg(all(target_arch = "x86", target_os = "none"))]
mod entry {
    use log::{error, info};
    use shell::{Shell, config::ShellConfig};
    use ulib::{
        logger,
        syscalls::{self, Syscalls},
    };

    #[unsafe(no_mangle)]
    pub extern "C" fn _start() -> ! {
        let config = ShellConfig::default();
        let _ = logger::init(config.log_level);
        info!("shell starting");

        let mut gateway = Syscalls;
        let mut shell = Shell::new(&mut gateway, config);
        shell.run(&mut gateway)
    }

    #[panic_handler]
    fn panic(info: &core::panic::PanicInfo) -> ! {
        error!("{}", info);
        syscalls::terminate(1);
    }
}

#[cfg(not(all(target_arch = "x86", target_os = "none")))]
fn main() {}
