//! Command-line interface for css-camelize
//!
//! Usage:
//!   css-camelize [`<input>`] [--output `<path>`] [--scope `<class>`] [--config `<file>`]
//!   css-camelize `<input>` --stdout
//!
//! Without arguments the paths come from the configuration (embedded defaults,
//! then `css-camelize.toml` in the working directory, then `--config`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use css_camelize::config::{Loader, PROJECT_CONFIG_FILE};
use css_camelize::{rewrite_with, Result, RewriteConfig, StylesheetLoader};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = build_cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("css-camelize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip a scoping prefix from a CSS module and camelCase its class selectors")
        .arg(
            Arg::new("input")
                .help("Stylesheet to rewrite (default: input_path from the configuration)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Destination file (default: the input path with `.new` appended)"),
        )
        .arg(
            Arg::new("scope")
                .long("scope")
                .short('s')
                .help("Scope class to strip, without the leading dot (default: profile-page)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Additional TOML configuration file"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the rewritten stylesheet instead of writing a file")
                .action(ArgAction::SetTrue),
        )
}

fn load_config(matches: &ArgMatches) -> Result<RewriteConfig> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for (arg, key) in [
        ("input", "input_path"),
        ("output", "output_path"),
        ("scope", "scope_class"),
    ] {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }
    loader.build()
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    if matches.get_flag("stdout") {
        let rewritten =
            StylesheetLoader::from_path(&config.input_path)?.rewrite(&config.scope_class);
        print!("{}", rewritten);
        return Ok(());
    }

    let output_path = rewrite_with(&config)?;
    println!(
        "Converted {} to {}",
        config.input_path.display(),
        output_path.display()
    );
    Ok(())
}
