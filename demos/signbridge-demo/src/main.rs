//! SignBridge Demo Application
//!
//! Runs one translation per invocation and prints the result as JSON:
//! - text → sign units and animation
//! - gesture label sequence → sentence
//! - single gesture label → display text
//! - landmark file → classified gesture
//!
//! Global options come before the command:
//!   --config <file>    translator configuration (JSON)
//!   --lexicon <file>   replacement lexicon tables (JSON)
//!   --log <format>     pretty | json
//!   --user <id>        record the translation in an in-memory history

use std::error::Error;
use std::fs;
use std::sync::Arc;

use serde::Serialize;
use signbridge_core::{GestureLabel, Handedness, Landmark, Lexicon, SignInput};
use signbridge_history::MemoryHistory;
use signbridge_runtime::{init_logging, LogFormat, Translator, TranslatorConfig};
use tracing::{debug, info};

const USAGE: &str = "\
usage: signbridge-demo [options] <command> [args...]

commands:
  text <words...>             translate text to sign units
  sequence <label...>         translate a gesture label sequence to text
  gesture <label>             display text for one gesture label
  classify <file> [left|right] classify a JSON array of 21 landmarks
  lexicon                     print the built-in lexicon tables
  stats                       run every command above on sample input and print counters

options:
  --config <file>   --lexicon <file>   --log <pretty|json>   --user <id>";

#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    lexicon: Option<String>,
    log: LogFormat,
    user: Option<String>,
    command: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, Box<dyn Error>> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => options.config = Some(args.next().ok_or("--config needs a file")?),
            "--lexicon" => options.lexicon = Some(args.next().ok_or("--lexicon needs a file")?),
            "--log" => options.log = args.next().ok_or("--log needs a format")?.parse()?,
            "--user" => options.user = Some(args.next().ok_or("--user needs an id")?),
            "-h" | "--help" => {
                options.command.clear();
                break;
            }
            command => {
                options.command.push(command.to_string());
                options.command.extend(args.by_ref());
            }
        }
    }
    Ok(options)
}

fn build_translator(options: &Options) -> Result<Translator, Box<dyn Error>> {
    let config = match &options.config {
        Some(path) => TranslatorConfig::from_json(&fs::read_to_string(path)?)?,
        None => TranslatorConfig::default(),
    };
    let lexicon = match &options.lexicon {
        Some(path) => {
            info!("Loading lexicon from {}", path);
            Lexicon::from_json(&fs::read_to_string(path)?)?
        }
        None => Lexicon::builtin(),
    };

    let mut translator = Translator::with_lexicon(config.clone(), lexicon)?;
    if options.user.is_some() {
        translator = translator.with_history(Arc::new(MemoryHistory::new(config.history)));
    }
    Ok(translator)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_labels(args: &[String]) -> Vec<GestureLabel> {
    args.iter().map(|a| GestureLabel::parse(a)).collect()
}

fn run(translator: &Translator, options: &Options) -> Result<(), Box<dyn Error>> {
    let (command, args) = match options.command.split_first() {
        Some((command, args)) => (command.as_str(), args),
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };
    let user = options.user.as_deref();
    debug!("Running {} with {} arguments", command, args.len());

    match command {
        "text" => {
            let text = args.join(" ");
            let result = match user {
                Some(user) => translator.text_to_signs_for(user, &text)?,
                None => translator.text_to_signs(&text),
            };
            print_json(&result)?;
        }
        "sequence" => {
            let labels = parse_labels(args);
            let result = match user {
                Some(user) => translator.sequence_to_text_for(user, &labels)?,
                None => translator.sequence_to_text(&labels),
            };
            print_json(&result)?;
        }
        "gesture" => {
            let input = match args.first() {
                Some(label) => SignInput::from_hint(GestureLabel::parse(label)),
                None => SignInput::default(),
            };
            let result = match user {
                Some(user) => translator.gesture_to_text_for(user, &input)?,
                None => translator.gesture_to_text(&input),
            };
            print_json(&result)?;
        }
        "classify" => {
            let path = args.first().ok_or("classify needs a landmark file")?;
            let landmarks: Vec<Landmark> = serde_json::from_str(&fs::read_to_string(path)?)?;
            let handedness = args
                .get(1)
                .map(|h| Handedness::parse(h))
                .unwrap_or_default();
            print_json(&translator.explain_gesture(&landmarks, handedness))?;
        }
        "lexicon" => print_json(&translator.lexicon().to_tables())?,
        "stats" => {
            translator.text_to_signs("hello zq");
            translator.sequence_to_text(&[GestureLabel::OpenPalm, GestureLabel::Fist]);
            translator.gesture_to_text(&SignInput::from_hint(GestureLabel::Ok));
            print_json(&translator.stats())?;
        }
        other => return Err(format!("unknown command {:?}\n\n{}", other, USAGE).into()),
    }

    if let Some(user) = user {
        print_json(&translator.history(user, None)?)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = parse_args(std::env::args().skip(1))?;
    init_logging(options.log)?;

    let translator = build_translator(&options)?;
    run(&translator, &options)
}
