use clap::{App, AppSettings, Arg};
use forkwait::{config, unix};

fn main() {
    let matches = App::new("forkwait")
        .setting(AppSettings::TrailingVarArg)
        .about(
            "forkwait runs one command in a child process and waits for it to finish.

            To run a command from the built-in list (ls, date, uname, ps, top, df, uptime, whoami, free):

                $ forkwait <keyword>

            To run an arbitrary command:

                $ forkwait --literal <program> [args...]

            Without arguments the default command (ls -l unless configured) is run.
            ",
        )
        .arg(Arg::with_name("file").short("f").long("file").takes_value(true).help("a toml file with forkwait configuration"))
        .arg(Arg::with_name("config").short("c").long("config").takes_value(true).help("pass toml configuration in command line"))
        .arg(Arg::with_name("observe-stops").long("observe-stops").help("also report children stopped by a signal; a stopped child is resumed with SIGCONT and left running"))
        .arg(Arg::with_name("literal").short("x").long("literal").help("run the arguments as given instead of looking up a keyword"))
        .arg(Arg::with_name("commands").multiple(true))
        .get_matches();

    if matches.value_of("file").is_some() && matches.value_of("config").is_some() {
        eprintln!("Options --file and --config must not appear together.");
        std::process::exit(1)
    }

    let config_str = if let Some(file) = matches.value_of("file") {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Failed to read configuration file {}: {}", file, err);
                std::process::exit(1)
            }
        }
    } else if let Some(raw_config) = matches.value_of("config") {
        String::from(raw_config)
    } else {
        String::new()
    };

    let mut config: config::Config = match toml::from_str(config_str.as_str()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration unparsable: {}", err);
            std::process::exit(1)
        }
    };
    if matches.is_present("observe-stops") {
        config.observe_stops = true;
    }
    if config.default_command.is_empty() {
        eprintln!("Configuration default_command must name an executable.");
        std::process::exit(1)
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

    let commands: Vec<String> = matches
        .values_of("commands")
        .map(|values| values.map(String::from).collect())
        .unwrap_or_default();

    if cfg!(unix) {
        unix::run(&config, &commands, matches.is_present("literal"));
    } else {
        eprintln!("Unsupported operating system");
        std::process::exit(1);
    }
}
