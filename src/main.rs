use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use stlview::utils::logger::Logger;
use stlview::commands::{CommandFactory, StlCommandFactory};

fn main() {
    let matches = ClapCommand::new("stlview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read header fields and images from STL X-ray scanner files")
        .arg(
            Arg::new("input")
                .help("Input STL file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show raw field text and decoder diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract the image")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file (.png, .tif or .bmp)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Where to write the log")
                .value_name("FILE")
                .default_value("stlview.log"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("stlview.log");

    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("stlview-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = StlCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
