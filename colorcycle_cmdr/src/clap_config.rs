// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://docs.rs/clap/latest/clap/_derive/#overview>
//! - <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colorcycle::{ColorResult, CycleConfig};

#[derive(Debug, Parser)]
#[command(bin_name = "colorcycle")]
#[command(about = "🎨 A color for every moment of the hour")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  colorcycle [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(global = true, long, help = "Saturation in [0, 1], overrides the config file")]
    pub saturation: Option<f64>,

    #[arg(
        global = true,
        long,
        help = "Luminescence in [0, 1], overrides the config file"
    )]
    pub luminescence: Option<f64>,

    #[arg(
        global = true,
        long,
        allow_negative_numbers = true,
        help = "Hue (degrees) at the start of each span, overrides the config file"
    )]
    pub start_hue: Option<f64>,

    #[arg(global = true, long, help = "Walk the color wheel backwards")]
    pub reverse: bool,

    #[arg(
        global = true,
        long,
        conflicts_with = "reverse",
        help = "Walk the color wheel forwards, even if the config file says backwards"
    )]
    pub no_reverse: bool,

    #[arg(
        global = true,
        long,
        help = "Minutes for one full turn of the color wheel, overrides the config file"
    )]
    pub span_minutes: Option<f64>,

    #[arg(
        global = true,
        long,
        value_name = "FILE",
        help = "Read settings from this JSON file instead of the default config file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `colorcycle_log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

impl GlobalOption {
    /// Apply the flags that were given on top of `config`, then validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`colorcycle::ColorCycleError::InvalidConfig`] if the merged config is
    /// invalid.
    pub fn apply_overrides(&self, config: CycleConfig) -> ColorResult<CycleConfig> {
        let merged = CycleConfig {
            saturation: self.saturation.unwrap_or(config.saturation),
            luminescence: self.luminescence.unwrap_or(config.luminescence),
            start_hue: self.start_hue.unwrap_or(config.start_hue),
            reverse: match (self.reverse, self.no_reverse) {
                (true, _) => true,
                (_, true) => false,
                _ => config.reverse,
            },
            span_minutes: self.span_minutes.unwrap_or(config.span_minutes),
        };
        merged.validate()?;
        Ok(merged)
    }
}

#[derive(Debug, Args)]
pub struct ModeOption {
    #[arg(
        long,
        short = 'm',
        default_value = "hex",
        help = "Output mode: `hex`, `rgb`, `hsl`, or an empty string for no output"
    )]
    pub mode: String,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🕰️ Print the color for the current local time\n💡 Eg: `colorcycle now --mode rgb`")]
    Now {
        #[command(flatten)]
        mode_option: ModeOption,
    },

    #[clap(about = "⏱️ Print the color for a given time\n💡 Eg: `colorcycle at 14:30`")]
    At {
        #[arg(value_name = "HH:MM[:SS]", help = "Time of day in 24 hour format")]
        time: String,

        #[command(flatten)]
        mode_option: ModeOption,
    },

    #[clap(
        about = "🔁 Convert a color between representations\n💡 Eg: `colorcycle convert --hex ff8800 --mode hsl`"
    )]
    #[command(group(clap::ArgGroup::new("input").required(true).multiple(false)))]
    Convert {
        #[arg(
            long,
            num_args = 3,
            value_names = ["R", "G", "B"],
            allow_negative_numbers = true,
            group = "input",
            help = "Decimal channels, each wraps around to [0, 255]"
        )]
        rgb: Option<Vec<i64>>,

        #[arg(long, value_name = "RRGGBB", group = "input", help = "6 hex digits")]
        hex: Option<String>,

        #[arg(
            long,
            num_args = 3,
            value_names = ["H", "S", "L"],
            allow_negative_numbers = true,
            group = "input",
            help = "Hue in [0, 360), saturation and luminescence in [0, 1]"
        )]
        hsl: Option<Vec<f64>>,

        #[command(flatten)]
        mode_option: ModeOption,
    },

    #[clap(
        about = "📁 Print where a swatch of the current color would be saved\n💡 Eg: `colorcycle path --dir ~/swatches`"
    )]
    Path {
        #[arg(long, help = "Folder for the swatch, defaults to the OS temp folder")]
        dir: Option<PathBuf>,

        #[arg(long, help = "File name without extension, defaults to the hex color")]
        filename: Option<String>,

        #[arg(long, help = "File extension, defaults to `png`")]
        extension: Option<String>,

        #[arg(
            long,
            value_name = "HH:MM[:SS]",
            help = "Use this time instead of the current time"
        )]
        at: Option<String>,
    },

    #[clap(about = "⚙️ Show or create the config file")]
    Config {
        #[command(subcommand)]
        config_subcommand: ConfigSubcommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    #[clap(about = "Print the effective config (file plus flags) as JSON")]
    Show,

    #[clap(about = "Write the default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
