use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, info, Level};

use promptweight::formatting::{format_segments, Identity, Syntax};
use promptweight::language::WeightHighlightConfig;
use promptweight::parsing;
use promptweight::rendering::{render_segments, Terminal};
use promptweight::templating::{self, Fragment, Page};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("promptweight")
        .version(VERSION)
        .propagate_version(true)
        .about("Highlight the emphasis weights in image generation prompts.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log diagnostic information to standard error."),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given prompt with its weights highlighted")
                .arg(config_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["html", "terminal", "plain"])
                        .default_value("html")
                        .help("Which kind of output to produce."),
                )
                .arg(
                    Arg::new("standalone")
                        .long("standalone")
                        .action(ArgAction::SetTrue)
                        .help("Wrap HTML output in a complete document with a stylesheet."),
                )
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("List each fragment of the given prompt along with its effective weight")
                .arg(config_arg())
                .arg(filename_arg()),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("render", submatches)) => {
            let config = load_config(submatches);
            let filename = filename(submatches);
            let content = load_content(filename);

            let segments = parsing::parse(&content, &config);

            let output = submatches
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("html");
            debug!("Rendering as {}", output);

            let result = match output {
                "terminal" => {
                    let mut result = render_segments(&Terminal::new(&config), &segments);
                    if !result.is_empty() && !result.ends_with('\n') {
                        result.push('\n');
                    }
                    result
                }
                "plain" => render_segments(&Identity, &segments),
                _ => {
                    let result = if submatches.get_flag("standalone") {
                        let title = match filename.to_str() {
                            Some("-") => "prompt".into(),
                            _ => filename
                                .file_name()
                                .map(|name| name.to_string_lossy())
                                .unwrap_or_default(),
                        };
                        templating::fill(&Page::new(&title), &segments, &config)
                    } else {
                        templating::fill(&Fragment, &segments, &config)
                    };
                    match result {
                        Ok(markup) => markup,
                        Err(error) => fail(&error),
                    }
                }
            };

            print!("{}", result);
        }
        Some(("inspect", submatches)) => {
            let config = load_config(submatches);
            let content = load_content(filename(submatches));

            let segments = parsing::parse(&content, &config);

            for (syntax, content) in format_segments(&segments) {
                match syntax {
                    Syntax::Weighted(weight) => {
                        println!("{:<16} {:>10.4} {:?}", "Weighted", weight, content)
                    }
                    _ => println!("{:<16} {:>10} {:?}", format!("{:?}", syntax), "", content),
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: promptweight [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("A JSON file with highlighting settings; anything not given takes its default.")
}

fn filename_arg() -> Arg {
    Arg::new("filename")
        .default_value("-")
        .help("The file containing the prompt, or '-' to read standard input.")
}

fn filename(submatches: &ArgMatches) -> &Path {
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");
    Path::new(filename)
}

fn load_config(submatches: &ArgMatches) -> WeightHighlightConfig {
    match submatches.get_one::<String>("config") {
        Some(filename) => {
            info!("Loading configuration: {}", filename);
            match WeightHighlightConfig::load(Path::new(filename)) {
                Ok(config) => config,
                Err(error) => fail(&error),
            }
        }
        None => WeightHighlightConfig::default(),
    }
}

fn load_content(filename: &Path) -> String {
    info!("Reading prompt: {}", filename.display());
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => fail(&error),
    }
}

fn fail(error: &dyn std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".bright_red(), error);
    std::process::exit(1);
}
