use anyhow::{bail, Result};
use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use windfall::utils::{self, file_handler::load_config_file};
use windfall::{parse_hit_test, Config, Overrides};
use windfall_core::Manager;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() -> Result<()> {
    let matches = command!()
        .about("Makes your windows fall, bounce and fly when thrown")
        .help_template(utils::get_help_template())
        .args(&[
            arg!(-c --config <PATH> "Use this configuration file instead of the default one")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
            arg!(--"hit-test" <MODE> "How the window under the cursor is found")
                .required(false)
                .value_parser(["stack", "bounding-box"]),
            arg!(--"skip-maximized" "Leave maximized windows where they are"),
            arg!(--"tick-rate" <HZ> "Ticks per second")
                .required(false)
                .value_parser(value_parser!(f64)),
            arg!(-t --title <TITLE> "Only animate the window with this title, can be repeated")
                .required(false)
                .action(ArgAction::Append),
            arg!(--ticks <COUNT> "Stop after this many ticks")
                .required(false)
                .value_parser(value_parser!(u64)),
        ])
        .subcommand(
            Command::new("check")
                .about("Checks the configuration file")
                .args(&[
                    arg!(-v --verbose "Outputs the received configuration"),
                    arg!([PATH] "The file to check, the default configuration file otherwise")
                        .value_parser(value_parser!(PathBuf)),
                ]),
        )
        .get_matches();

    if let Some(check_matches) = matches.subcommand_matches("check") {
        return check(
            check_matches.get_one::<PathBuf>("PATH").cloned(),
            check_matches.get_flag("verbose"),
        );
    }

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config_file(Some(path.clone()))?,
        None => windfall::load(),
    };
    config.apply_overrides(overrides(&matches));

    let (subscribers, log_parse_err) = utils::log::parse_log_level(&config.log_level);
    tracing::subscriber::set_global_default(subscribers)?;
    if let Some(err) = log_parse_err {
        tracing::warn!("Error parsing log_level config: {err}");
    }
    tracing::info!("windfall booting...");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    tracing::info!("Loading XLib backend");
    let display_server = XlibDisplayServer::new()?;
    let titles = config.tracked_titles().map(<[String]>::to_vec);
    let mut manager =
        Manager::<XlibWindowHandle, Config, XlibDisplayServer>::new(config, display_server);
    match titles {
        Some(titles) => manager.track_titles(&titles)?,
        None => manager.discover_windows()?,
    };

    rt.block_on(manager.start_event_loop(matches.get_one::<u64>("ticks").copied()))?;
    tracing::info!("Completed after {} ticks", manager.ticks);
    Ok(())
}

fn overrides(matches: &ArgMatches) -> Overrides {
    Overrides {
        hit_test: matches
            .get_one::<String>("hit-test")
            .and_then(|mode| parse_hit_test(mode)),
        skip_maximized: matches.get_flag("skip-maximized"),
        tick_rate: matches.get_one::<f64>("tick-rate").copied(),
        titles: matches
            .get_many::<String>("title")
            .map(|titles| titles.cloned().collect())
            .unwrap_or_default(),
    }
}

fn check(path: Option<PathBuf>, verbose: bool) -> Result<()> {
    println!(
        "\x1b[0;94m::\x1b[0m windfall version: {}",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(path) = &path {
        println!("\x1b[1;35mNote: Using file {} \x1b[0m", path.display());
    }

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config: Config = match load_config_file(path) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("Configuration failed. Reason: {err:?}");
            bail!("the configuration could not be loaded");
        }
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking values . . .");
    let issues = config.check(verbose);
    if issues.is_empty() {
        println!("\x1b[0;92m    -> Values OK \x1b[0m");
        return Ok(());
    }
    for issue in &issues {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {issue} \x1b[0m");
    }
    bail!("{} problems found in the configuration", issues.len())
}
