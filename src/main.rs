use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use amerbrit::{DictionaryStore, Direction, Translator};
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let matches = Command::new("amerbrit")
        .version("0.1.0")
        .about("Translate text between American and British English")
        .arg(
            Arg::new("text")
                .help("Text to translate (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .short('l')
                .help("american-to-british or british-to-american")
                .default_value(Direction::AmericanToBritish.as_str()),
        )
        .arg(
            Arg::new("dictionaries")
                .long("dictionaries")
                .short('d')
                .help("Directory of JSON tables overriding the built-in ones"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each translation pass")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let directive = if verbose { "amerbrit=trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    let store = match matches.get_one::<String>("dictionaries") {
        Some(dir) => DictionaryStore::from_dir(Path::new(dir))?,
        None => DictionaryStore::builtin()?,
    };
    let translator = Translator::with_store(store)?;

    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            match buffer.strip_suffix('\n') {
                Some(stripped) => stripped.to_string(),
                None => buffer,
            }
        }
    };
    let locale = matches
        .get_one::<String>("locale")
        .map(String::as_str)
        .unwrap_or(Direction::AmericanToBritish.as_str());

    if verbose {
        eprintln!("📝 Source: \"{}\"", text);
        eprintln!("🌍 {}", locale);
    }

    match translator.translate(Some(&text), locale) {
        Ok(translation) => {
            println!("{}", translation);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            Ok(ExitCode::from(2))
        }
    }
}
