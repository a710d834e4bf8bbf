pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fork: {0}")]
    Fork(#[source] nix::Error),

    #[error("waitpid({pid}): {source}")]
    Wait {
        pid: nix::unistd::Pid,
        source: nix::Error,
    },

    #[error("kill({pid}, {signal}): {source}")]
    Kill {
        pid: nix::unistd::Pid,
        signal: nix::sys::signal::Signal,
        source: nix::Error,
    },

    #[error("command must name an executable")]
    EmptyCommand,

    #[error("argument {index} of command contains a NUL byte")]
    NulInArgument {
        index: usize,
        source: std::ffi::NulError,
    },
}
