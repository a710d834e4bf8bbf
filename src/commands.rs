use crate::unix::error::{Error, Result};
use log::warn;
use phf::phf_map;
use std::fmt;

/// An executable name followed by its arguments. Never empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Command(Vec<String>);

impl Command {
    /// Fails with [`Error::EmptyCommand`] when `argv` is empty.
    pub fn new(argv: Vec<String>) -> Result<Command> {
        if argv.is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(Command(argv))
    }

    fn from_static(argv: &[&str]) -> Command {
        Command(argv.iter().map(|s| s.to_string()).collect())
    }

    pub fn program(&self) -> &str {
        &self.0[0]
    }

    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

static ALLOW_LIST: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "ls" =>     &["ls", "-l"],
    "date" =>   &["date"],
    "uname" =>  &["uname", "-a"],
    "ps" =>     &["ps", "aux"],
    "top" =>    &["top", "-n", "1"],
    "df" =>     &["df", "-h"],
    "uptime" => &["uptime"],
    "whoami" => &["whoami"],
    "free" =>   &["free", "-h"],
};

pub fn allow_list_lookup(keyword: &str) -> Option<Command> {
    ALLOW_LIST.get(keyword).map(|argv| Command::from_static(argv))
}

/// Picks the command to run from the invocation arguments.
///
/// With `literal` the arguments are run as given. Otherwise the first argument
/// is a keyword of the allow-list; `ls` alone keeps its default flags while
/// `ls` with extra arguments runs them as given. Unknown keywords fall back to
/// `default` with a warning.
pub fn resolve(args: &[String], literal: bool, default: &Command) -> Command {
    let keyword = match args.first() {
        Some(keyword) => keyword,
        None => return default.clone(),
    };

    if literal || (keyword == "ls" && args.len() > 1) {
        return Command(args.to_vec());
    }

    match allow_list_lookup(keyword) {
        Some(command) => command,
        None => {
            warn!("Unknown command: {}. Defaulting to '{}'.", keyword, default);
            default.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn default() -> Command {
        Command::new(argv(&["ls", "-l"])).unwrap()
    }

    #[test]
    fn empty_command_rejected() {
        assert!(matches!(Command::new(vec![]), Err(Error::EmptyCommand)));
    }

    #[test]
    fn accessors() {
        let command = Command::new(argv(&["uname", "-a"])).unwrap();
        assert_eq!("uname", command.program());
        assert_eq!(&argv(&["-a"])[..], command.args());
        assert_eq!("uname -a", command.to_string());
    }

    #[test]
    fn no_arguments_uses_default() {
        assert_eq!(default(), resolve(&[], false, &default()));
    }

    #[test]
    fn keyword_selects_allow_list_entry() {
        assert_eq!(
            argv(&["top", "-n", "1"]),
            resolve(&argv(&["top"]), false, &default()).as_slice()
        );
        assert_eq!(
            argv(&["free", "-h"]),
            resolve(&argv(&["free", "--ignored"]), false, &default()).as_slice()
        );
    }

    #[test]
    fn ls_with_arguments_runs_verbatim() {
        assert_eq!(
            argv(&["ls", "-a", "/tmp"]),
            resolve(&argv(&["ls", "-a", "/tmp"]), false, &default()).as_slice()
        );
        assert_eq!(
            argv(&["ls", "-l"]),
            resolve(&argv(&["ls"]), false, &default()).as_slice()
        );
    }

    #[test]
    fn unknown_keyword_falls_back() {
        let fallback = Command::new(argv(&["date"])).unwrap();
        assert_eq!(fallback, resolve(&argv(&["cowsay", "hi"]), false, &fallback));
    }

    #[test]
    fn literal_bypasses_allow_list() {
        assert_eq!(
            argv(&["sh", "-c", "exit 3"]),
            resolve(&argv(&["sh", "-c", "exit 3"]), true, &default()).as_slice()
        );
        assert_eq!(
            argv(&["date", "+%s"]),
            resolve(&argv(&["date", "+%s"]), true, &default()).as_slice()
        );
    }

    #[test]
    fn every_allow_list_entry_names_its_keyword() {
        for (keyword, _) in ALLOW_LIST.entries() {
            assert_eq!(*keyword, allow_list_lookup(keyword).unwrap().program());
        }
    }
}
