// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use colorcycle::{ClockTime, ColorFormatter, ColorValue, CommonResult, CycleConfig,
                 ExportTarget, HexValue, HslValue, RgbValue};

use crate::{CLIArg, CLICommand, ConfigSubcommand, resolve_config_file_path,
            try_load_cycle_config, try_write_config_file};

/// Run the command and return the text to print. Uses the local wall clock for commands
/// that need the current time.
///
/// # Errors
///
/// Returns an error if the config can't be loaded, if any input can't be parsed, or if
/// the output mode is not accepted.
pub fn try_run_command(cli_arg: &CLIArg) -> CommonResult<String> {
    try_run_command_with_clock(cli_arg, ClockTime::now)
}

/// Same as [`try_run_command`], but `clock` supplies the current time.
///
/// # Errors
///
/// See [`try_run_command`].
pub fn try_run_command_with_clock(
    cli_arg: &CLIArg,
    clock: impl FnOnce() -> ClockTime,
) -> CommonResult<String> {
    match &cli_arg.command {
        // Runs before any config is loaded, so that a broken config file can be replaced.
        CLICommand::Config {
            config_subcommand: ConfigSubcommand::Init { force },
        } => try_init_config_file(cli_arg, *force),
        _ => try_render_output(cli_arg, clock),
    }
}

fn try_render_output(
    cli_arg: &CLIArg,
    clock: impl FnOnce() -> ClockTime,
) -> CommonResult<String> {
    let options = &cli_arg.global_options;
    let file_config = try_load_cycle_config(options.config.as_deref())?;
    let config = options.apply_overrides(file_config)?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Effective config", config = ?config);

    let formatter = ColorFormatter::default();

    Ok(match &cli_arg.command {
        CLICommand::Now { mode_option } => {
            let hsl = clock().to_hsl(&config)?;
            formatter.format(&hsl, &mode_option.mode)?
        }
        CLICommand::At { time, mode_option } => {
            let hsl = time.parse::<ClockTime>()?.to_hsl(&config)?;
            formatter.format(&hsl, &mode_option.mode)?
        }
        CLICommand::Convert {
            rgb,
            hex,
            hsl,
            mode_option,
        } => {
            let color = parse_color_input(rgb.as_deref(), hex.as_deref(), hsl.as_deref())?;
            formatter.format(&color, &mode_option.mode)?
        }
        CLICommand::Path {
            dir,
            filename,
            extension,
            at,
        } => {
            let time = match at {
                Some(it) => it.parse::<ClockTime>()?,
                None => clock(),
            };
            let target = dir.clone().map(ExportTarget::new).unwrap_or_default();
            let path = target.plan(
                &time.to_hsl(&config)?,
                filename.as_deref(),
                extension.as_deref(),
            )?;
            path.display().to_string()
        }
        CLICommand::Config { .. } => config.to_json_string_pretty()?,
    })
}

/// Exactly one of the inputs must be `Some`. Clap enforces this for the binary, this
/// catches callers that build [`CLIArg`] by hand.
fn parse_color_input(
    rgb: Option<&[i64]>,
    hex: Option<&str>,
    hsl: Option<&[f64]>,
) -> CommonResult<ColorValue> {
    match (rgb, hex, hsl) {
        (Some(&[red, green, blue]), None, None) => {
            Ok(RgbValue::new(red, green, blue).into())
        }
        (None, Some(text), None) => Ok(HexValue::try_from_hex_str(text)?.into()),
        (None, None, Some(&[hue, saturation, luminescence])) => {
            Ok(HslValue::new(hue, saturation, luminescence).into())
        }
        _ => Err(miette::miette!(
            code = "colorcycle::cli::color_input",
            help = "Pass `--rgb R G B`, `--hex RRGGBB`, or `--hsl H S L`",
            "Exactly one of --rgb, --hex, or --hsl is required"
        )),
    }
}

fn try_init_config_file(cli_arg: &CLIArg, force: bool) -> CommonResult<String> {
    let options = &cli_arg.global_options;
    let path = resolve_config_file_path(options.config.as_deref()).ok_or_else(|| {
        miette::miette!(
            code = "colorcycle::config::no_folder",
            help = "Pass `--config <FILE>` to choose where to write it",
            "Could not find the config folder for this OS"
        )
    })?;
    let config = options.apply_overrides(CycleConfig::default())?;
    try_write_config_file(&path, &config, force)?;
    Ok(path.display().to_string())
}
