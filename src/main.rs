use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use xprompt::{AppError, BuildOptions, CONFIG_FILE, Language, PromptSpec};

#[derive(Parser)]
#[command(name = "xprompt")]
#[command(version)]
#[command(
    about = "Build structured image-generation prompts (ID ➜ EN)",
    long_about = None
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a prompt from a spec file
    #[clap(visible_alias = "b")]
    Build {
        /// Prompt spec file (TOML with [fields] and [toggles])
        spec: Option<PathBuf>,
        /// Output language: EN or ID
        #[arg(short, long, default_value = "EN")]
        lang: String,
        /// Collapse the result to a single line
        #[arg(long)]
        one_line: bool,
        /// Ask for each field and toggle interactively
        #[arg(short, long)]
        interactive: bool,
        /// Write the prompt to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Recover fields from free-form text
    Parse {
        /// Input file; reads stdin when omitted or "-"
        input: Option<PathBuf>,
        /// Emit JSON instead of a TOML prompt spec
        #[arg(long)]
        json: bool,
    },
    /// Draft all eight sections from a theme via Gemini
    Theme {
        /// Theme, e.g. "Kartun buah 3D"
        theme: String,
        /// Style bias appended to the instruction
        #[arg(short, long, default_value = "")]
        style: String,
        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,
        /// Print the instruction without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Polish a composed prompt without changing its structure
    Enhance {
        /// Prompt spec file
        spec: PathBuf,
        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,
        /// Print the instruction without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate alternative prompts with the same structure
    Variations {
        /// Prompt spec file
        spec: PathBuf,
        /// How many alternatives to request (1-10)
        #[arg(short = 'n', long, default_value_t = 3)]
        count: u32,
        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,
        /// Print the instruction without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Translate the Indonesian rendition to English
    Translate {
        /// Prompt spec file
        spec: PathBuf,
        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,
        /// Print the instruction without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Write the JSON export payload for a spec
    Export {
        /// Prompt spec file
        spec: PathBuf,
        /// File with enhanced prompt text to embed
        #[arg(long)]
        enhanced: Option<PathBuf>,
        /// File with variations text to embed
        #[arg(long)]
        variations: Option<PathBuf>,
        /// Write the payload to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Build { spec, lang, one_line, interactive, out } => {
            let language = parse_language(&lang)?;
            let options = BuildOptions { language, one_line };
            let result = if interactive {
                xprompt::build_interactive(&options)?.1
            } else {
                let path = spec.ok_or_else(|| {
                    AppError::config_error("Provide a prompt spec file or use --interactive")
                })?;
                xprompt::build_from_file(&path, &options)?
            };
            emit(&result.prompt, out.as_deref())
        }
        Commands::Parse { input, json } => {
            let text = read_input(input.as_deref())?;
            let spec = xprompt::parse_to_spec(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&spec)?);
            } else {
                print!("{}", spec.to_toml()?);
            }
            Ok(())
        }
        Commands::Theme { theme, style, model, dry_run } => {
            if dry_run {
                println!("{}", xprompt::theme_instruction(&theme, &style)?);
                return Ok(());
            }
            let config = xprompt::load_config(&cli.config)?;
            let model = model.unwrap_or_else(|| config.gemini.model.clone());
            let fields = xprompt::expand_theme(&config, &theme, &style, &model)?;
            let spec = PromptSpec { fields, ..PromptSpec::default() };
            print!("{}", spec.to_toml()?);
            Ok(())
        }
        Commands::Enhance { spec, model, dry_run } => {
            let spec = PromptSpec::load(&spec)?;
            if dry_run {
                println!("{}", xprompt::enhance_instruction(&spec)?);
                return Ok(());
            }
            let config = xprompt::load_config(&cli.config)?;
            let model = model.unwrap_or_else(|| config.gemini.model.clone());
            println!("{}", xprompt::enhance_prompt(&config, &spec, &model)?);
            Ok(())
        }
        Commands::Variations { spec, count, model, dry_run } => {
            let spec = PromptSpec::load(&spec)?;
            if dry_run {
                println!("{}", xprompt::variations_instruction(&spec, count)?);
                return Ok(());
            }
            let config = xprompt::load_config(&cli.config)?;
            let model = model.unwrap_or_else(|| config.gemini.model.clone());
            println!("{}", xprompt::variation_prompts(&config, &spec, count, &model)?);
            Ok(())
        }
        Commands::Translate { spec, model, dry_run } => {
            let spec = PromptSpec::load(&spec)?;
            if dry_run {
                println!("{}", xprompt::translation_instruction(&spec)?);
                return Ok(());
            }
            let config = xprompt::load_config(&cli.config)?;
            let model = model.unwrap_or_else(|| config.gemini.model.clone());
            println!("{}", xprompt::translate_prompt(&config, &spec, &model)?);
            Ok(())
        }
        Commands::Export { spec, enhanced, variations, out } => {
            let spec = PromptSpec::load(&spec)?;
            let enhanced = enhanced.map(fs::read_to_string).transpose()?;
            let variations = variations.map(fs::read_to_string).transpose()?;
            let json = xprompt::export_json(&spec, enhanced.as_deref(), variations.as_deref())?;
            emit(&json, out.as_deref())
        }
    }
}

fn parse_language(code: &str) -> Result<Language, AppError> {
    Language::from_code(code).ok_or_else(|| AppError::UnknownLanguage(code.to_string()))
}

fn read_input(input: Option<&Path>) -> Result<String, AppError> {
    match input {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => Ok(io::read_to_string(io::stdin())?),
    }
}

fn emit(text: &str, out: Option<&Path>) -> Result<(), AppError> {
    match out {
        Some(path) => {
            fs::write(path, text)?;
            println!("✅ Written to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
