use log::debug;
use ulib::Gateway;

use crate::drive::DriveState;

mod cd;
pub mod dir;
mod exit;
mod help;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Dir,
    Help,
    Exit,
}

pub struct BuiltinCommand {
    pub name: &'static [u8],
    pub summary: &'static str,
    pub builtin: Builtin,
}

// One table per name length; names within a table are distinct.
const LENGTH_2: &[BuiltinCommand] = &[BuiltinCommand {
    name: b"cd",
    summary: "change directory (not implemented)",
    builtin: Builtin::Cd,
}];

const LENGTH_3: &[BuiltinCommand] = &[BuiltinCommand {
    name: b"dir",
    summary: "list the root of the active drive",
    builtin: Builtin::Dir,
}];

const LENGTH_4: &[BuiltinCommand] = &[
    BuiltinCommand {
        name: b"help",
        summary: "show this list",
        builtin: Builtin::Help,
    },
    BuiltinCommand {
        name: b"exit",
        summary: "leave the shell",
        builtin: Builtin::Exit,
    },
];

const TABLES: [&[BuiltinCommand]; 3] = [LENGTH_2, LENGTH_3, LENGTH_4];

fn bucket(len: usize) -> Option<&'static [BuiltinCommand]> {
    match len {
        2 => Some(LENGTH_2),
        3 => Some(LENGTH_3),
        4 => Some(LENGTH_4),
        _ => None,
    }
}

/// Every candidate is compared from its own first byte.
fn name_matches(name: &[u8], token: &[u8]) -> bool {
    name.len() == token.len() && name.iter().zip(token).all(|(a, b)| a == b)
}

/// Exact-match lookup: the token length picks the table, then every byte must
/// match.
pub fn lookup(token: &[u8]) -> Option<Builtin> {
    bucket(token.len())?
        .iter()
        .find(|command| name_matches(command.name, token))
        .map(|command| command.builtin)
}

pub fn all() -> impl Iterator<Item = &'static BuiltinCommand> {
    TABLES.into_iter().flatten()
}

impl Builtin {
    pub fn run<G: Gateway>(self, gateway: &mut G, drive: &DriveState) {
        debug!("builtin {:?}", self);
        match self {
            Builtin::Cd => cd::run(gateway),
            Builtin::Dir => {
                if let Ok(count) = dir::run(gateway, drive) {
                    debug!("dir listed {} entries", count);
                }
            }
            Builtin::Help => help::run(gateway),
            Builtin::Exit => exit::run(gateway),
        }
    }
}
