use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use cardview_cli::config::AppConfig;
use cardview_cli::logging::init_logging;
use cardview_cli::output::{render_json, render_text};
use cardview_core::{CardField, CardInput};
use cardview_ui::{CardView, Platform};
use tracing::info;

/// Render the flippable credit card view model for a set of form values.
#[derive(Debug, Parser)]
#[command(
    name = "cardview",
    author,
    version,
    about = "Resolve card brand, visible face and text slots for a card form"
)]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Card number, possibly partial.
    #[arg(long, default_value = "")]
    number: String,

    /// Card holder name.
    #[arg(long, default_value = "")]
    name: String,

    /// Expiry as typed (e.g. 12/29).
    #[arg(long, default_value = "")]
    expiry: String,

    /// Security code.
    #[arg(long, default_value = "")]
    cvc: String,

    /// Field that currently has focus.
    #[arg(long, value_enum)]
    focused: Option<FieldArg>,

    /// Override the view scale.
    #[arg(long)]
    scale: Option<f64>,

    /// Override the platform (selects the default font).
    #[arg(long, value_enum)]
    platform: Option<PlatformArg>,

    /// Override the expiry title label.
    #[arg(long, value_name = "TEXT")]
    expiry_title: Option<String>,

    /// Override the tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit after validating the configuration (nothing is rendered).
    #[arg(long)]
    validate_only: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldArg {
    Number,
    Name,
    Expiry,
    Cvc,
}

impl From<FieldArg> for CardField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Number => CardField::Number,
            FieldArg::Name => CardField::Name,
            FieldArg::Expiry => CardField::Expiry,
            FieldArg::Cvc => CardField::Cvc,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlatformArg {
    Ios,
    Android,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Android => Platform::Android,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => AppConfig::from_path(path)?,
        None => AppConfig::default(),
    };

    if let Some(scale) = cli.scale {
        config.view.scale = scale;
    }

    if let Some(platform) = cli.platform {
        config.view.platform = platform.into();
    }

    if let Some(title) = cli.expiry_title {
        config.view.expiry_title = Some(title);
    }

    if let Some(level) = cli.log_level {
        config.logging.tracing_level = level;
    }

    config.validate()?;

    if cli.validate_only {
        println!("Configuration is valid.");
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging)?;
    let view = CardView::new(config.view)?;

    let input = CardInput::new()
        .with_number(cli.number)
        .with_name(cli.name)
        .with_expiry(cli.expiry)
        .with_cvc(cli.cvc)
        .with_focus(cli.focused.map(CardField::from));

    let model = view.render_standard(&input);
    info!(brand = model.brand.id(), flipped = model.flipped, "card view rendered");

    match cli.format {
        Format::Text => print!("{}", render_text(&model)?),
        Format::Json => println!("{}", render_json(&model)?),
    }

    Ok(())
}
