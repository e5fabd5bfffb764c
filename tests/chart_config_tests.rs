use candle_chart::ChartError;
use candle_chart::api::ChartConfig;
use candle_chart::core::LabelClock;
use candle_chart::render::Color;

#[test]
fn default_config_is_valid_and_round_trips_json() {
    let config = ChartConfig::default()
        .with_time_label_clock(LabelClock::Fixed {
            offset_seconds: 3_600,
        })
        .with_surface_height(480);
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn defaults_match_reference_layout() {
    let config = ChartConfig::default();
    assert_eq!(config.surface_height, 400);
    assert_eq!(config.window.reference_width_px, 800.0);
    assert_eq!(config.window.reference_candle_count, 70.0);
    assert_eq!(config.window.reference_intervals, 10.0);
    assert_eq!(config.candles.pitch_px, 10.0);
    assert_eq!(config.candles.body_width_px, 8.0);
    assert_eq!(config.volume_band.baseline_y, 370.0);
    assert_eq!(config.volume_band.height_px, 60.0);
    assert_eq!(config.time_label_stride, 9);
    assert_eq!(config.style.bottom_padding_px, 30.0);
    assert_eq!(config.style.volume_alpha, 0.5);
}

#[test]
fn partial_json_fills_remaining_fields_with_defaults() {
    let config = ChartConfig::from_json_str(
        r##"{
            "surface_height": 300,
            "window": { "reference_candle_count": 35 },
            "style": { "bullish_color": "#00ff00" }
        }"##,
    )
    .expect("parse");

    assert_eq!(config.surface_height, 300);
    assert_eq!(config.window.reference_candle_count, 35.0);
    assert_eq!(config.window.reference_width_px, 800.0);
    assert_eq!(config.style.bullish_color, Color::rgb(0.0, 1.0, 0.0));
    assert_eq!(config.style.bearish_color, Color::rgb8(0xff, 0x33, 0x00));
    assert_eq!(config.candles, ChartConfig::default().candles);
}

#[test]
fn label_clock_uses_tagged_json() {
    let config = ChartConfig::from_json_str(
        r##"{ "time_label_clock": { "kind": "fixed", "offset_seconds": -18000 } }"##,
    )
    .expect("parse");
    assert_eq!(
        config.time_label_clock,
        LabelClock::Fixed {
            offset_seconds: -18_000
        }
    );

    let utc = ChartConfig::from_json_str(r##"{ "time_label_clock": { "kind": "utc" } }"##)
        .expect("parse");
    assert_eq!(utc.time_label_clock, LabelClock::Utc);
}

#[test]
fn invalid_values_are_rejected() {
    let alpha = ChartConfig::from_json_str(r##"{ "style": { "volume_alpha": 1.5 } }"##);
    assert!(matches!(alpha, Err(ChartError::InvalidData(_))));

    let stride = ChartConfig::from_json_str(r##"{ "time_label_stride": 0 }"##);
    assert!(matches!(stride, Err(ChartError::InvalidData(_))));

    let height = ChartConfig::from_json_str(r##"{ "surface_height": 0 }"##);
    assert!(matches!(height, Err(ChartError::InvalidViewport { .. })));

    let pitch = ChartConfig::from_json_str(r##"{ "candles": { "pitch_px": -1 } }"##);
    assert!(matches!(pitch, Err(ChartError::InvalidData(_))));
}

#[test]
fn malformed_colors_fail_to_parse() {
    let err = ChartConfig::from_json_str(r##"{ "style": { "grid_color": "#12" } }"##)
        .expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn colors_serialize_as_hex() {
    assert_eq!(Color::rgb8(0x00, 0x80, 0x00).to_hex(), "#008000");
    assert_eq!(
        Color::from_hex("#ff330080").expect("hex").to_hex(),
        "#ff330080"
    );
    assert_eq!(Color::from_hex("ddDDdd").expect("hex"), Color::rgb8(0xdd, 0xdd, 0xdd));
}

#[test]
fn formatter_follows_config() {
    let config = ChartConfig::default().with_time_label_clock(LabelClock::Utc);
    let formatter = config.time_axis_formatter();
    assert_eq!(formatter.clock(), LabelClock::Utc);
    assert_eq!(formatter.stride(), 9);
    assert_eq!(formatter.format(1_699_920_000 + 3_660), "01:01");
}
