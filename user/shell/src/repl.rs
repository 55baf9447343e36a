use log::debug;
use ulib::{Gateway, io::Ascii, print_to};

use crate::{
    commands::{self, Builtin},
    config::ShellConfig,
    drive::{self, DRIVE_NAME_CAPACITY, DriveState},
    input::{self, LineBuffer},
    launch::{self, Launch},
};

/// What one prompt cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Empty,
    Builtin(Builtin),
    DriveSwitch(u32),
    Launched(Launch),
}

pub struct Shell {
    config: ShellConfig,
    line: LineBuffer,
    drive: DriveState,
}

impl Shell {
    pub fn new<G: Gateway>(gateway: &mut G, config: ShellConfig) -> Self {
        Self {
            config,
            line: LineBuffer::new(),
            drive: DriveState::inherit(gateway),
        }
    }

    pub fn drive(&self) -> &DriveState {
        &self.drive
    }

    pub fn run<G: Gateway>(&mut self, gateway: &mut G) -> ! {
        loop {
            let step = self.step(gateway);
            debug!("{:?}", step);
        }
    }

    /// Prompt, read one line and act on it.
    pub fn step<G: Gateway>(&mut self, gateway: &mut G) -> Step {
        self.prompt(gateway);
        self.line.fill(gateway);
        self.dispatch(gateway)
    }

    /// Renders `<drive>:\> `, asking the kernel for the drive name each time.
    pub fn prompt<G: Gateway>(&mut self, gateway: &mut G) {
        let mut name = [0; DRIVE_NAME_CAPACITY];
        let name = match gateway.current_drive_name(&mut name) {
            Ok(len) => &name[..len.min(DRIVE_NAME_CAPACITY)],
            Err(_) => self.drive.name(),
        };
        print_to!(gateway, "{}:\\{}", Ascii(name), self.config.prompt_marker);
    }

    /// Builtins first, then drive switches, then programs.
    pub fn dispatch<G: Gateway>(&mut self, gateway: &mut G) -> Step {
        let line = self.line.as_bytes();
        let command_end = input::command_end(line);
        if command_end == 0 {
            return Step::Empty;
        }
        let token = &line[..command_end];

        if let Some(builtin) = commands::lookup(token) {
            builtin.run(gateway, &self.drive);
            return Step::Builtin(builtin);
        }

        if let Some(name) = drive::drive_switch_name(token) {
            return Step::DriveSwitch(self.drive.switch(gateway, name));
        }

        Step::Launched(launch::launch(gateway, line, command_end, self.config.exec_format))
    }
}
