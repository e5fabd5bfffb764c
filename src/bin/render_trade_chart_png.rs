use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use candle_chart::api::{ChartConfig, ChartSurface, JsonFileTradeSource};
use candle_chart::core::SurfaceGeometry;
use candle_chart::render::CairoSurface;

const DEFAULT_WIDTH: u32 = 800;

struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    width: u32,
    config_path: Option<PathBuf>,
}

fn main() {
    let _ = candle_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    let surface = CairoSurface::new(SurfaceGeometry::new(args.width, config.surface_height))
        .map_err(|err| err.to_string())?;
    let mut chart =
        ChartSurface::new(surface, config, args.width).map_err(|err| err.to_string())?;
    chart
        .load_from(&JsonFileTradeSource::new(&args.input_path))
        .map_err(|err| err.to_string())?;

    let file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create output `{}`: {err}",
            args.output_path.display()
        )
    })?;
    let mut writer = BufWriter::new(file);
    chart
        .surface()
        .write_png(&mut writer)
        .map_err(|err| err.to_string())?;

    if let Some(summary) = chart.last_redraw() {
        println!(
            "wrote {} ({}x{}, {} candles, {} time labels)",
            args.output_path.display(),
            summary.geometry.width,
            summary.geometry.height,
            summary.candles,
            summary.time_labels
        );
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut width = DEFAULT_WIDTH;
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = value
                    .parse()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [input_path, output_path]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| format!("expected <input.json> <output.png>\n\n{}", usage_message()))?;

    Ok(CliArgs {
        input_path,
        output_path,
        width,
        config_path,
    })
}

fn usage_message() -> &'static str {
    "usage: render_trade_chart_png <input.json> <output.png> [--width <px>] [--config <chart.json>]"
}
