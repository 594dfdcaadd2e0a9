//! reqforge: prepare template-driven HTTP requests.
//!
//! Gathers template files from arguments or a stdin pipe, loads an
//! optional environment file, routes `name!` templates through the
//! editor, and reports the backend tool that would run the request.

use reqforge::config::Config;
use reqforge::{backend, env, logging, template};

const USAGE: &str = "\
usage: reqforge [OPTIONS] [TEMPLATE...]

Template filenames may instead be piped on stdin. A filename ending
with `!` is opened in your editor before use.

options:
  --init             print a starter template for this system
  --dump-config      print the merged effective configuration
  -e, --env FILE     load an environment file before anything else
  -v, --verbose      debug logging
  -h, --help         show this help
      --version      show version";

struct Cli {
    verbose: bool,
    init: bool,
    dump_config: bool,
    env_file: Option<String>,
    templates: Vec<String>,
}

fn parse_args(args: Vec<String>) -> Result<Cli, String> {
    let mut cli = Cli {
        verbose: false,
        init: false,
        dump_config: false,
        env_file: None,
        templates: Vec::new(),
    };
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => cli.verbose = true,
            "--init" => cli.init = true,
            "--dump-config" => cli.dump_config = true,
            "-e" | "--env" => match iter.next() {
                Some(path) => cli.env_file = Some(path),
                None => return Err(format!("{arg} requires a file argument")),
            },
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown flag: {arg}"));
            }
            _ => cli.templates.push(arg),
        }
    }
    Ok(cli)
}

fn main() {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    if raw_args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }
    if raw_args.iter().any(|a| a == "--version") {
        println!("reqforge {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let cli = match parse_args(raw_args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("reqforge: {msg}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    logging::init(cli.verbose);
    let config = Config::load();

    // An explicitly requested env file must exist; the configured default
    // is loaded leniently.
    let env_result = match (&cli.env_file, &config.env.file) {
        (Some(path), _) => env::load_env_file(path, true),
        (None, Some(path)) => env::load_env_file(path, false),
        (None, None) => Ok(()),
    };
    if let Err(e) = env_result {
        eprintln!("reqforge: {e}");
        std::process::exit(1);
    }

    if cli.dump_config {
        match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("reqforge: failed to render config: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.init {
        let backends = backend::detect_backends(&config.backend.priority);
        print!("{}", template::render_starter(&backends));
        return;
    }

    let templates = match template::template_filenames(&cli.templates) {
        Ok(names) => names,
        Err(e) => {
            eprintln!("reqforge: {e}");
            std::process::exit(1);
        }
    };
    if templates.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let Some(chosen) = backend::select_backend(&config.backend.priority) else {
        eprintln!(
            "reqforge: no request backend found on PATH (tried: {})",
            config.backend.priority.join(", ")
        );
        std::process::exit(1);
    };

    for name in &templates {
        match template::read_template(name, &config) {
            Ok(content) => {
                println!("# template: {name}");
                println!("# backend: {chosen}");
                print!("{content}");
                if !content.ends_with('\n') {
                    println!();
                }
            }
            Err(e) => {
                eprintln!("reqforge: {name}: {e}");
                std::process::exit(1);
            }
        }
    }
}
