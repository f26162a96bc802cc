use anyhow::{Context, Result, bail};
use memo_markup_config::Config;
use memo_markup_engine::{
    RenderOptions, TextAttributes, parse, render::offsets::to_byte_offset, render_blocks,
    render_markup, render_styled_runs,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

mod tui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Preview,
    Html,
    Runs,
    Blocks,
}

fn parse_args(args: &[String]) -> Result<(Mode, PathBuf)> {
    let mut mode = Mode::Preview;
    let mut path = None;

    for arg in args.iter().skip(1) {
        let flag_mode = match arg.as_str() {
            "--html" => Mode::Html,
            "--runs" => Mode::Runs,
            "--blocks" => Mode::Blocks,
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            file => {
                if path.replace(PathBuf::from(file)).is_some() {
                    bail!("only one file can be given");
                }
                continue;
            }
        };
        if mode != Mode::Preview {
            bail!("only one of --html, --runs, --blocks can be given");
        }
        mode = flag_mode;
    }

    match path {
        Some(path) => Ok((mode, path)),
        None => bail!("no file given"),
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("memo-markup-cli", String::as_str)
}

fn load_options() -> Result<RenderOptions> {
    let config_path = Config::config_path();
    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Using config file {}", config_path.display());
            Ok(config.render_options())
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Ok(RenderOptions::default())
        }
    }
}

fn read_note(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    log::info!("Loaded {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Comma-separated names of the attributes that are set, e.g. `h2,syntax`.
fn describe_attributes(attributes: &TextAttributes) -> String {
    let mut names = vec![];
    if let Some(level) = attributes.heading {
        names.push(format!("h{level}"));
    }
    let flags = [
        (attributes.bold, "bold"),
        (attributes.italic, "italic"),
        (attributes.code, "code"),
        (attributes.quote, "quote"),
        (attributes.list_item, "list"),
        (attributes.code_block, "code_block"),
        (attributes.rule, "rule"),
        (attributes.syntax, "syntax"),
    ];
    names.extend(
        flags
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, name)| name.to_string()),
    );
    names.join(",")
}

fn runs_listing(text: &str, options: &RenderOptions) -> Vec<String> {
    let unit = options.offset_unit;
    render_styled_runs(&parse(text), unit)
        .into_iter()
        .map(|run| {
            let start = to_byte_offset(text, unit, run.range.start);
            let end = to_byte_offset(text, unit, run.range.end);
            format!(
                "{}..{} {} {:?}",
                run.range.start,
                run.range.end,
                describe_attributes(&run.attributes),
                &text[start..end]
            )
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let (mode, path) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} [--html | --runs | --blocks] <file>", program_name(&args));
            process::exit(1);
        }
    };

    let options = load_options().context("Failed to load config file")?;
    let text = read_note(&path)?;

    match mode {
        Mode::Preview => tui::run(&path, text, &options)?,
        Mode::Html => {
            let doc = parse(&text);
            let mut markup = options.markup.clone();
            markup.title = doc.title();
            println!("{}", render_markup(&doc, &markup));
        }
        Mode::Runs => {
            for line in runs_listing(&text, &options) {
                println!("{line}");
            }
        }
        Mode::Blocks => {
            for block in render_blocks(&parse(&text), &options.display) {
                println!("{block:#?}");
            }
        }
    }

    Ok(())
}
