use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info, LevelFilter};

use maidenhead::{ParseOptions, Point, Precision};

fn cli() -> Command {
    Command::new("maidenhead")
        .about("Convert between coordinates and Maidenhead locators")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a latitude/longitude pair as a locator")
                .arg(
                    Arg::new("lat")
                        .help("Latitude in degrees")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("lon")
                        .help("Longitude in degrees")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .help("Number of character pairs (1-5)")
                        .value_name("PAIRS")
                        .default_value("3")
                        .value_parser(clap::value_parser!(i32)),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode a locator into a latitude/longitude pair")
                .arg(Arg::new("locator").help("Maidenhead locator").required(true))
                .arg(
                    Arg::new("strict")
                        .short('s')
                        .long("strict")
                        .help("Require canonical letter case")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("centered")
                        .short('c')
                        .long("centered")
                        .help("Return the center of the cell instead of its southwest corner")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("distance")
                .about("Distance and bearing between the centers of two locators")
                .arg(Arg::new("from").help("Starting locator").required(true))
                .arg(Arg::new("to").help("Destination locator").required(true)),
        )
}

fn encode(matches: &ArgMatches) -> Result<(), maidenhead::Error> {
    let lat = matches.get_one::<f64>("lat").copied().unwrap_or_default();
    let lon = matches.get_one::<f64>("lon").copied().unwrap_or_default();
    let precision = matches.get_one::<i32>("precision").copied().unwrap_or(3);
    let precision = Precision::try_from(precision)?;

    let locator = Point::new(lat, lon).locator(precision)?;
    println!("{locator}");

    Ok(())
}

fn decode(matches: &ArgMatches) -> Result<(), maidenhead::Error> {
    let locator = matches.get_one::<String>("locator").map_or("", String::as_str);
    let options = ParseOptions {
        strict: matches.get_flag("strict"),
        centered: matches.get_flag("centered"),
    };

    let point = maidenhead::parse_with(locator, options)?;
    if let Some(precision) = Precision::from_len(locator.len()) {
        info!("{locator} is a {precision} locator");
    }
    println!("{point}");

    Ok(())
}

fn distance(matches: &ArgMatches) -> Result<(), maidenhead::Error> {
    let from = matches.get_one::<String>("from").map_or("", String::as_str);
    let to = matches.get_one::<String>("to").map_or("", String::as_str);

    let from = maidenhead::parse_centered(from)?;
    let to = maidenhead::parse_centered(to)?;

    let compass = from
        .compass_bearing(&to)
        .map_or_else(|| "-".to_string(), |c| c.to_string());
    println!(
        "{:.3} km, {:.1}° {compass}",
        from.distance(&to),
        from.bearing(&to),
    );

    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match matches.subcommand() {
        Some(("encode", sub)) => encode(sub),
        Some(("decode", sub)) => decode(sub),
        Some(("distance", sub)) => distance(sub),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(e) = result {
        error!("Command failed: {e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
