use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use glimpse::Registry;
use glimpse_cli::config::resolve_print_options;
use glimpse_cli::input::{load_snapshot, matrix_snapshot, vector_snapshot, ElementType};
use glimpse_cli::tree::render_tree;

fn element_arg() -> Arg {
    Arg::new("element")
        .help("Element type: float, double, int, bool, short or unsigned")
        .required(true)
        .value_parser(clap::builder::ValueParser::new(|s: &str| s.parse::<ElementType>()))
}

fn values_arg() -> Arg {
    Arg::new("values")
        .help("Element values")
        .required(true)
        .num_args(1..)
        .allow_negative_numbers(true)
        .action(ArgAction::Append)
}

fn build_cli() -> Command {
    Command::new("glimpse")
        .version(clap::crate_version!())
        .about("Render glm vectors and matrices the way the debugger visualizers show them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("JSON file with print options")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .global(true)
                .help("Fractional digits shown per element. Overrides the config file.")
                .value_parser(clap::value_parser!(usize)),
        )
        .subcommand(
            Command::new("vec")
                .about("Render a vector built from literal values")
                .arg(element_arg())
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("mat")
                .about("Render a matrix built from literal values, given column by column")
                .arg(element_arg())
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .required(true)
                        .help("Elements per column")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Render the root value of a JSON snapshot file")
                .arg(
                    Arg::new("snapshot")
                        .help("Path to the snapshot file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn literals(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("values")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("GLIMPSE_LOG", "error,glimpse=info"))
        .init();

    let matches = build_cli().get_matches();

    let options = resolve_print_options(
        matches.get_one::<PathBuf>("config"),
        matches.get_one::<usize>("precision").copied(),
    )?;
    let registry = Registry::glm_with_options(options);

    let file = match matches.subcommand() {
        Some(("vec", sub)) => {
            let element = *sub.get_one::<ElementType>("element").unwrap();
            vector_snapshot(element, &literals(sub))?
        }
        Some(("mat", sub)) => {
            let element = *sub.get_one::<ElementType>("element").unwrap();
            let rows = *sub.get_one::<usize>("rows").unwrap();
            matrix_snapshot(element, rows, &literals(sub))?
        }
        Some(("inspect", sub)) => load_snapshot(sub.get_one::<PathBuf>("snapshot").unwrap())?,
        _ => unreachable!("Subcommand is required"),
    };

    let output = render_tree(&registry, &file.root_value())?;
    print!("{}", output);
    Ok(())
}
