pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod validation;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

pub use domain::params::ParameterMap;
pub use domain::template::{derive_path, PathResolver};
pub use domain::{generate_query_from_string, reverse_lookup_params};
pub use error::QueryError;

use services::{serializer_for_extension, CollectionService};

fn template_arg() -> Arg {
    Arg::new("template")
        .short('t')
        .long("template")
        .value_name("TEMPLATE")
        .help("Page path template, e.g. /blog/{fields__slug}.js")
        .required(true)
}

fn record_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .short('r')
        .long(name)
        .value_name("FILE")
        .help(help)
        .required(true)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("CONFIG")
        .help("Path to a YAML or JSON routes file")
        .default_value(config::DEFAULT_CONFIG_FILE)
        .value_parser(value_parser!(PathBuf))
}

/// Command line definition of the `pathql` binary
pub fn build_cli() -> clap::Command {
    clap::Command::new("pathql")
        .about("Build collection page queries from path templates and recover route parameters")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            clap::Command::new("query")
                .about("Print the GraphQL query for a template")
                .arg(
                    Arg::new("model")
                        .short('m')
                        .long("model")
                        .value_name("SKELETON")
                        .help("Model name, root expression, or query containing ...CollectionPagesQueryFragment")
                        .required(true),
                )
                .arg(template_arg()),
        )
        .subcommand(
            clap::Command::new("params")
                .about("Print the route parameters of a JSON record")
                .arg(template_arg())
                .arg(record_arg("record", "JSON record file, or - for stdin")),
        )
        .subcommand(
            clap::Command::new("path")
                .about("Print the page path a JSON record resolves to")
                .arg(template_arg())
                .arg(record_arg("record", "JSON record file, or - for stdin")),
        )
        .subcommand(
            clap::Command::new("check")
                .about("Validate a template and list its tokens")
                .arg(template_arg()),
        )
        .subcommand(
            clap::Command::new("routes")
                .about("Print the query of every configured route")
                .arg(config_arg())
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_name("FORMAT")
                        .help("Print the validated routes file as yml or json instead of queries"),
                ),
        )
        .subcommand(
            clap::Command::new("plan")
                .about("Print the pages a route creates for a JSON array of records")
                .arg(
                    Arg::new("route")
                        .long("route")
                        .value_name("NAME")
                        .help("Route name from the routes file")
                        .required(true),
                )
                .arg(record_arg("records", "JSON array file, or - for stdin"))
                .arg(config_arg()),
        )
}

/// Execute a parsed command line, writing results to stdout
pub fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("query", sub)) => {
            let query = generate_query_from_string(required(sub, "model")?, required(sub, "template")?)?;
            println!("{}", query);
        }
        Some(("params", sub)) => {
            let record = read_json(required(sub, "record")?)?;
            let params = reverse_lookup_params(&record, required(sub, "template")?)?;
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
        Some(("path", sub)) => {
            let record = read_json(required(sub, "record")?)?;
            let template = required(sub, "template")?;
            let params = reverse_lookup_params(&record, template)?;
            println!("{}", derive_path(template, &params)?);
        }
        Some(("check", sub)) => {
            let parsed = validation::validate_template(required(sub, "template")?)?;
            let tokens: Vec<&str> = parsed.tokens().iter().map(|t| t.raw.as_str()).collect();
            println!("ok: {} token(s): {}", tokens.len(), tokens.join(", "));
        }
        Some(("routes", sub)) => {
            let routes = load_config(sub)?;
            if let Some(format) = sub.get_one::<String>("format") {
                let serializer = serializer_for_extension(format)
                    .with_context(|| format!("Unknown routes format: {}", format))?;
                print!("{}", serializer.serialize(&routes)?);
                return Ok(());
            }
            for (name, query) in CollectionService::new(routes)?.queries()? {
                println!("# {}\n{}\n", name, query);
            }
        }
        Some(("plan", sub)) => {
            let service = CollectionService::new(load_config(sub)?)?;
            let records = match read_json(required(sub, "records")?)? {
                Value::Array(records) => records,
                other => vec![other],
            };
            let result = service.plan_pages(required(sub, "route")?, &records)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => unreachable!("subcommand_required is set"),
    }
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .with_context(|| format!("Missing argument: {}", name))
}

fn load_config(matches: &ArgMatches) -> Result<Vec<config::RouteSettings>> {
    let path = matches.get_one::<PathBuf>("config").map(|p| p.as_path());
    config::load_routes(path)
}

fn read_json(source: &str) -> Result<Value> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Could not read {}", source))?
    };
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", source))
}
