//! listlang CLI
//!
//! Applies a single list operation to literal operands and prints the result.
//! Operands are JSON arrays of integers, or `@path` to read one from a file.

use anyhow::{Context, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use listlang_value::IntegerList;
use std::fs;
use std::io::{self, Write};
use std::process;

/// Result of a single operation
#[derive(Debug, PartialEq, Eq)]
enum Output {
    List(IntegerList),
    Int(i64),
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let result = run(&matches).and_then(|output| emit(&output, matches.get_flag("json")));
    if let Err(e) = result {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("listlang-cli")
        .version("0.1.0")
        .about("Apply listlang list operations to integer lists")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log operands and operations to stderr"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print list results as JSON arrays"),
        )
        .subcommand(
            Command::new("show")
                .about("Print a list")
                .arg(list_arg("list")),
        )
        .subcommand(
            Command::new("len")
                .about("Print the number of elements")
                .arg(list_arg("list")),
        )
        .subcommand(
            Command::new("bool")
                .about("Print 1 for a non-empty list, 0 otherwise")
                .arg(list_arg("list")),
        )
        .subcommand(
            Command::new("get")
                .about("Print the element at INDEX")
                .arg(list_arg("list"))
                .arg(int_arg("index", "INDEX")),
        )
        .subcommand(
            Command::new("del")
                .about("Remove the element at INDEX")
                .arg(list_arg("list"))
                .arg(int_arg("index", "INDEX")),
        )
        .subcommand(
            Command::new("slice")
                .about("Elements with index in [BEGIN, END)")
                .arg(list_arg("list"))
                .arg(int_arg("begin", "BEGIN"))
                .arg(int_arg("end", "END")),
        )
        .subcommand(
            Command::new("concat")
                .about("Append OTHER to LIST")
                .arg(list_arg("list"))
                .arg(list_arg("other").value_name("OTHER")),
        )
        .subcommand(
            Command::new("mul")
                .about("Repeat LIST TIMES times")
                .arg(list_arg("list"))
                .arg(int_arg("times", "TIMES")),
        )
        .subcommand(
            Command::new("remove-every")
                .about("Drop every element equal to VALUE")
                .arg(list_arg("list"))
                .arg(int_arg("value", "VALUE")),
        )
        .subcommand(
            Command::new("eq")
                .about("Print 1 if both lists are equal, 0 otherwise")
                .arg(list_arg("list"))
                .arg(list_arg("other").value_name("OTHER")),
        )
        .subcommand(
            Command::new("incr")
                .about("Prepend 0 (or append with --post)")
                .arg(list_arg("list"))
                .arg(post_arg()),
        )
        .subcommand(
            Command::new("decr")
                .about("Drop the first element (or the last with --post)")
                .arg(list_arg("list"))
                .arg(post_arg()),
        )
}

fn list_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .value_name("LIST")
        .help("JSON array of integers, or @FILE")
        .required(true)
}

fn int_arg(name: &'static str, value_name: &'static str) -> Arg {
    Arg::new(name)
        .value_name(value_name)
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(i64))
}

fn post_arg() -> Arg {
    Arg::new("post")
        .long("post")
        .action(ArgAction::SetTrue)
        .help("Operate on the end of the list")
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("LISTLANG_LOG", level))
        .init();
}

fn run(matches: &ArgMatches) -> Result<Output, anyhow::Error> {
    let Some((name, args)) = matches.subcommand() else {
        bail!("no command given");
    };

    let mut list = read_list(args, "list")?;
    log::debug!("running `{name}` on {list}");

    let output = match name {
        "show" => Output::List(list),
        "len" => Output::Int(i64::try_from(list.len())?),
        "bool" => Output::Int(list.to_int()),
        "get" => Output::Int(list.get(read_int(args, "index")?)?),
        "del" => {
            list.remove_at(read_int(args, "index")?)?;
            Output::List(list)
        }
        "slice" => Output::List(list.slice(read_int(args, "begin")?, read_int(args, "end")?)?),
        "concat" => Output::List(list.concat(&read_list(args, "other")?)),
        "mul" => Output::List(list.multiply(read_int(args, "times")?)),
        "remove-every" => Output::List(list.remove_every(read_int(args, "value")?)),
        "eq" => Output::Int(list.equal(&read_list(args, "other")?)),
        "incr" => {
            if args.get_flag("post") {
                list.post_increment();
            } else {
                list.pre_increment();
            }
            Output::List(list)
        }
        "decr" => {
            if args.get_flag("post") {
                list.post_decrement()?;
            } else {
                list.pre_decrement()?;
            }
            Output::List(list)
        }
        other => bail!("unknown command: {other}"),
    };

    log::debug!("`{name}` produced {output:?}");
    Ok(output)
}

fn read_int(args: &ArgMatches, name: &str) -> Result<i64, anyhow::Error> {
    args.get_one::<i64>(name)
        .copied()
        .with_context(|| format!("missing argument <{name}>"))
}

fn read_list(args: &ArgMatches, name: &str) -> Result<IntegerList, anyhow::Error> {
    let raw = args
        .get_one::<String>(name)
        .with_context(|| format!("missing argument <{name}>"))?;
    parse_list(raw)
}

/// Parse a JSON array literal, or the contents of the file named after `@`
fn parse_list(raw: &str) -> Result<IntegerList, anyhow::Error> {
    let text = match raw.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read list from {path}"))?,
        None => raw.to_string(),
    };

    let items: Vec<i64> = serde_json::from_str(&text)
        .with_context(|| format!("invalid list literal: {}", text.trim()))?;
    Ok(IntegerList::from(items))
}

fn emit(output: &Output, json: bool) -> Result<(), anyhow::Error> {
    match output {
        Output::List(list) if json => print!("{}", serde_json::to_string(&list.to_vec())?),
        Output::List(list) => list.print()?,
        Output::Int(n) => print!("{n}"),
    }
    io::stdout().flush()?;
    Ok(())
}
