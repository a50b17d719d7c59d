use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use flashbot::export::{to_json, write_exports};
use flashbot::render::format_cards;
use flashbot::{get_system_info, Config, FlashGenerator, FlashSettings, PostStyle, ResponseFormat};

#[derive(Parser)]
#[command(name = "flashbot", version, about = "Daily Indian fintech news flash cards")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Generate one edition and print the cards and social post.
    Generate(GenerateArgs),
    /// Parse a saved model reply (file or stdin) and print the selected items.
    Parse(ParseArgs),
    /// Run the Telegram bot.
    Bot(SettingsArgs),
    /// Show build information.
    Info,
}

#[derive(Args)]
struct SettingsArgs {
    /// Minimum parsed items before default content is used.
    #[arg(long)]
    min_items: Option<usize>,
    /// Layout requested from the model.
    #[arg(long, value_enum)]
    format: Option<ResponseFormat>,
    /// How the social post is written.
    #[arg(long, value_enum)]
    post_style: Option<PostStyle>,
}

impl SettingsArgs {
    fn apply(&self, settings: &mut FlashSettings) {
        if let Some(min_items) = self.min_items {
            settings.min_items = min_items;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(post_style) = self.post_style {
            settings.post_style = post_style;
        }
    }
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    settings: SettingsArgs,
    /// Edition date (YYYY-MM-DD), defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Write JSON and text exports into this directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Print the JSON export instead of the cards.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ParseArgs {
    /// Reply file, `-` or nothing for stdin.
    input: Option<PathBuf>,
    #[command(flatten)]
    settings: SettingsArgs,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

async fn generate(mut config: Config, args: GenerateArgs) -> Result<()> {
    args.settings.apply(&mut config.flash);
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let edition = FlashGenerator::new(config.ai, config.flash)
        .generate(date)
        .await;

    if let Some(notice) = edition.notice() {
        eprintln!("{notice}");
    }

    if args.json {
        println!("{}", to_json(&edition)?);
    } else {
        println!("{}", format_cards(&edition.items, &edition.long_date()));
        println!("{}\n\n{}", flashbot::messages::POST_HEADER, edition.post);
    }

    if let Some(dir) = args.out_dir {
        let (json_path, text_path) = write_exports(&edition, &dir)?;
        eprintln!("Saved {} and {}", json_path.display(), text_path.display());
    }
    Ok(())
}

fn parse(mut config: Config, args: ParseArgs) -> Result<()> {
    args.settings.apply(&mut config.flash);
    let text = read_input(args.input.as_ref())?;
    let selection = FlashGenerator::new(None, config.flash).select(Ok(text));

    if let Some(notice) = selection.notice() {
        eprintln!("{notice}");
    }
    println!("{}", serde_json::to_string_pretty(&selection.items)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        CliCommand::Generate(args) => generate(config, args).await?,
        CliCommand::Parse(args) => parse(config, args)?,
        CliCommand::Bot(settings) => {
            let mut config = config;
            settings.apply(&mut config.flash);
            flashbot::run_bot(config).await?
        }
        CliCommand::Info => println!("{}", get_system_info()),
    }
    Ok(())
}
