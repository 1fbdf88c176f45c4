use clap::{Parser, Subcommand};
use env_logger::Env;
use lengthconv::config::Config;
use lengthconv::converter::ConverterState;
use lengthconv::units::{self, LengthUnit, UnitError};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lengthconv")]
#[command(about = "Convert lengths between centimeters, meters, feet and millimeters", long_about = None)]
struct Cli {
    /// Config file (default: ./lengthconv.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Value to convert, either "5" or a quantity like "12 Foot"
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (Centimeters, Meters, Foot, Millimeters)
        #[arg(short, long)]
        from: Option<LengthUnit>,

        /// Target unit (Centimeters, Meters, Foot, Millimeters)
        #[arg(short, long)]
        to: Option<LengthUnit>,

        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported units and their factors
    Units {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit the value and units line by line, printing the result after each change
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let result = Config::discover(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            json,
        } => convert_value(&config, &value, from, to, json).map(|output| println!("{}", output)),
        Commands::Units { json } => list_units(&config, json),
        Commands::Interactive => run_interactive(&config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct ConversionOutput {
    value: f64,
    from: LengthUnit,
    to: LengthUnit,
    result: f64,
    display: String,
}

fn convert_value(
    config: &Config,
    input: &str,
    from: Option<LengthUnit>,
    to: Option<LengthUnit>,
    json: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    // A quantity carries its own source unit
    let (value, quantity_unit) = match units::parse_quantity(input) {
        Some((value, unit)) => (value, Some(unit)),
        None if units::parser::looks_like_quantity(input) => {
            return Err(UnitError::InvalidUnit(format!(
                "'{}' does not end in one of {:?}",
                input,
                LengthUnit::labels()
            ))
            .into())
        }
        None => (units::parse_input_value(input), None),
    };

    let from = match (quantity_unit, from) {
        (Some(a), Some(b)) if a != b => {
            return Err(UnitError::InvalidUnit(format!(
                "'{}' is in {} but --from is {}",
                input, a, b
            ))
            .into())
        }
        (Some(unit), _) => Some(unit),
        (None, explicit) => explicit.or(config.default_from),
    }
    .ok_or_else(|| {
        UnitError::InvalidUnit("no source unit, pass --from or set default_from".to_string())
    })?;
    let to = to.or(config.default_to).ok_or_else(|| {
        UnitError::InvalidUnit("no target unit, pass --to or set default_to".to_string())
    })?;

    let result = config.engine().convert(value, from, to);
    let display = units::format_result(&units::format_value(result), to.into());

    if json {
        let output = ConversionOutput {
            value,
            from,
            to,
            result,
            display,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(display)
    }
}

#[derive(Serialize)]
struct UnitRow {
    unit: LengthUnit,
    meters_per_unit: f64,
    units_per_meter: f64,
}

fn list_units(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let engine = config.engine();
    let rows: Vec<UnitRow> = LengthUnit::ALL
        .iter()
        .map(|&unit| UnitRow {
            unit,
            meters_per_unit: engine.factor(unit),
            units_per_meter: engine.inverse_factor(unit),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Foot calibration: {:?}", engine.calibration());
    println!("\nUnits ({}):", rows.len());
    for row in &rows {
        println!(
            "  - {} (1 = {} m, 1 m = {})",
            row.unit, row.meters_per_unit, row.units_per_meter
        );
    }

    Ok(())
}

fn run_interactive(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = ConverterState::with_units(
        config.engine(),
        config.default_from,
        config.default_to,
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(
        stdout,
        "Enter a value, 'from <unit>', 'to <unit>' or 'quit'. Units: {}",
        LengthUnit::labels().join(", ")
    )?;
    writeln!(stdout, "{}", state.result_line())?;

    for line in stdin.lock().lines() {
        let line = line?;
        match apply_line(&mut state, &line) {
            Ok(SessionStep::Quit) => break,
            Ok(SessionStep::Continue) => {}
            Err(e) => eprintln!("{}", e),
        }
        writeln!(stdout, "{}", state.result_line())?;
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum SessionStep {
    Continue,
    Quit,
}

/// Apply one interactive line to the screen state.
/// An unknown unit dismisses the picker, keeping the previous selection, and is reported.
fn apply_line(state: &mut ConverterState, line: &str) -> Result<SessionStep, UnitError> {
    let trimmed = line.trim();

    if trimmed == "quit" || trimmed == "exit" {
        return Ok(SessionStep::Quit);
    }

    if let Some(label) = trimmed.strip_prefix("from ") {
        let unit = label.parse::<LengthUnit>();
        state.pick_input_unit(unit.as_ref().ok().copied());
        unit?;
    } else if let Some(label) = trimmed.strip_prefix("to ") {
        let unit = label.parse::<LengthUnit>();
        state.pick_output_unit(unit.as_ref().ok().copied());
        unit?;
    } else {
        state.set_input_text(line);
    }

    Ok(SessionStep::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lengthconv::units::{ConversionEngine, UnitSelection};

    fn meters_to_millimeters() -> Config {
        Config {
            default_from: Some(LengthUnit::Meters),
            default_to: Some(LengthUnit::Millimeters),
            ..Config::empty()
        }
    }

    #[test]
    fn test_cli_accepts_negative_values() {
        let cli = Cli::try_parse_from([
            "lengthconv",
            "convert",
            "-5",
            "--from",
            "Meters",
            "--to",
            "Centimeters",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert {
                value, from, to, ..
            } => {
                assert_eq!(value, "-5");
                assert_eq!(from, Some(LengthUnit::Meters));
                assert_eq!(to, Some(LengthUnit::Centimeters));
            }
            _ => panic!("Expected convert command"),
        }

        let cli =
            Cli::try_parse_from(["lengthconv", "convert", "-3.5 Meters", "--to", "Centimeters"])
                .unwrap();
        match cli.command {
            Commands::Convert { value, from, .. } => {
                assert_eq!(value, "-3.5 Meters");
                assert_eq!(from, None);
            }
            _ => panic!("Expected convert command"),
        }
    }

    #[test]
    fn test_convert_negative_values() {
        let config = Config::empty();
        let output = convert_value(
            &config,
            "-5",
            Some(LengthUnit::Meters),
            Some(LengthUnit::Centimeters),
            false,
        )
        .unwrap();
        assert_eq!(output, "Result: -500.0 Centimeters");

        let output =
            convert_value(&config, "-3.5 Meters", None, Some(LengthUnit::Centimeters), false)
                .unwrap();
        assert_eq!(output, "Result: -350.0 Centimeters");
    }

    #[test]
    fn test_convert_quantity() {
        let output = convert_value(
            &Config::empty(),
            "12 Foot",
            None,
            Some(LengthUnit::Centimeters),
            false,
        )
        .unwrap();
        assert_eq!(output, "Result: 365.748 Centimeters");

        // Signed and bare-fraction quantities keep their unit
        let output =
            convert_value(&meters_to_millimeters(), "+5 Centimeters", None, None, false).unwrap();
        assert_eq!(output, "Result: 50.0 Millimeters");
        let output =
            convert_value(&Config::empty(), ".5 Meters", None, Some(LengthUnit::Centimeters), false)
                .unwrap();
        assert_eq!(output, "Result: 50.0 Centimeters");
    }

    #[test]
    fn test_quantity_conflicting_with_from_is_rejected() {
        let err = convert_value(
            &Config::empty(),
            "12 Foot",
            Some(LengthUnit::Meters),
            Some(LengthUnit::Centimeters),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid unit:"));

        // Agreeing units are fine
        assert!(convert_value(
            &Config::empty(),
            "12 Foot",
            Some(LengthUnit::Foot),
            Some(LengthUnit::Meters),
            false,
        )
        .is_ok());
    }

    #[test]
    fn test_config_defaults_fill_missing_units() {
        let config = meters_to_millimeters();
        let output = convert_value(&config, "2", None, None, false).unwrap();
        assert_eq!(output, "Result: 2000.0 Millimeters");

        // Explicit units win over defaults
        let output = convert_value(&config, "2", None, Some(LengthUnit::Centimeters), false).unwrap();
        assert_eq!(output, "Result: 200.0 Centimeters");
    }

    #[test]
    fn test_missing_unit_is_invalid_unit() {
        let err = convert_value(
            &Config::empty(),
            "5",
            None,
            Some(LengthUnit::Meters),
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UnitError>(),
            Some(UnitError::InvalidUnit(_))
        ));

        let err = convert_value(&Config::empty(), "5", Some(LengthUnit::Meters), None, false)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UnitError>(),
            Some(UnitError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_quantity_with_unknown_label_is_an_error() {
        let err = convert_value(
            &meters_to_millimeters(),
            "5 Inches",
            None,
            None,
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UnitError>(),
            Some(UnitError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_unparsable_value_converts_as_zero() {
        let output = convert_value(&meters_to_millimeters(), "abc", None, None, false).unwrap();
        assert_eq!(output, "Result: 0.0 Millimeters");
    }

    #[test]
    fn test_json_output() {
        let output = convert_value(
            &Config::empty(),
            "5",
            Some(LengthUnit::Meters),
            Some(LengthUnit::Centimeters),
            true,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["value"], 5.0);
        assert_eq!(json["from"], "Meters");
        assert_eq!(json["to"], "Centimeters");
        assert_eq!(json["result"], 500.0);
        assert_eq!(json["display"], "Result: 500.0 Centimeters");
    }

    #[test]
    fn test_interactive_lines() {
        let mut state = ConverterState::new(ConversionEngine::default());

        assert_eq!(apply_line(&mut state, "12"), Ok(SessionStep::Continue));
        assert_eq!(apply_line(&mut state, "from Foot"), Ok(SessionStep::Continue));
        assert_eq!(apply_line(&mut state, "to Meters"), Ok(SessionStep::Continue));
        assert_eq!(state.result_line(), "Result: 3.65748 Meters");

        assert_eq!(apply_line(&mut state, "-2"), Ok(SessionStep::Continue));
        assert_eq!(apply_line(&mut state, "from Meters"), Ok(SessionStep::Continue));
        assert_eq!(state.result_line(), "Result: -2.0 Meters");

        assert_eq!(apply_line(&mut state, "quit"), Ok(SessionStep::Quit));
        assert_eq!(apply_line(&mut state, "  exit  "), Ok(SessionStep::Quit));
    }

    #[test]
    fn test_interactive_unknown_unit_keeps_selection() {
        let mut state =
            ConverterState::with_units(ConversionEngine::default(), LengthUnit::Meters, LengthUnit::Centimeters);
        apply_line(&mut state, "5").unwrap();
        state.toggle_output_picker();

        let result = apply_line(&mut state, "to Inches");
        assert!(matches!(result, Err(UnitError::InvalidUnit(_))));
        assert_eq!(state.output_unit(), UnitSelection::Selected(LengthUnit::Centimeters));
        assert!(!state.output_picker.expanded);
        assert_eq!(state.result_line(), "Result: 500.0 Centimeters");
    }
}
