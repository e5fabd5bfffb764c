use candle_chart::core::{
    CandleLayout, ScaleMapper, TradeSample, TradeSeries, VisibleWindow, project_candles,
};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (1.0f64..10_000.0, -50.0f64..50.0, 0.0f64..25.0, 0.0f64..25.0).prop_map(
        |(open, delta, up, down)| {
            let close = (open + delta).max(0.5);
            let high = open.max(close) + up;
            let low = (open.min(close) - down).max(0.0);
            (open, high, low, close)
        },
    )
}

proptest! {
    #[test]
    fn projected_candles_stay_inside_drawable_band(
        rows in prop::collection::vec(sample_strategy(), 1..120),
        width in 1u32..2_000
    ) {
        let samples: Vec<TradeSample> = rows
            .iter()
            .enumerate()
            .map(|(i, &(open, high, low, close))| {
                TradeSample::new(i as i64 * 60, open, high, low, close, 10.0).expect("sample")
            })
            .collect();
        let series = TradeSeries::from_samples(&samples).expect("valid series");
        let window = VisibleWindow::trailing(&series, series.len());
        let scale = ScaleMapper::new(window.price_range().expect("range"), 0.0, 370.0);
        let candles = project_candles(window, scale, CandleLayout::default(), width);

        prop_assert_eq!(candles.len(), samples.len());
        for (steps_back, candle) in candles.iter().enumerate() {
            prop_assert_eq!(candle.steps_back, steps_back);
            prop_assert!(candle.body_height >= 1.0);
            prop_assert!(candle.body_top >= -1e-9);
            prop_assert!(candle.wick_top <= candle.wick_bottom);
            prop_assert!(candle.wick_bottom <= 370.0 + 1e-9);
            prop_assert!(candle.body_top + 1e-9 >= candle.wick_top);
        }
        for pair in candles.windows(2) {
            prop_assert_eq!(pair[0].center_x - pair[1].center_x, 10.0);
        }
    }

    #[test]
    fn bullishness_follows_close_minus_open(
        open in 1.0f64..1_000.0,
        delta in -10.0f64..10.0
    ) {
        let close = open + delta;
        let high = open.max(close) + 1.0;
        let low = open.min(close) - 1.0;
        let series = TradeSeries::from_samples(&[
            TradeSample::new(0, open, high, low, close, 1.0).expect("sample"),
        ])
        .expect("valid series");
        let window = VisibleWindow::trailing(&series, 1);
        let scale = ScaleMapper::new(window.price_range().expect("range"), 0.0, 370.0);
        let candle = project_candles(window, scale, CandleLayout::default(), 800)[0];
        prop_assert_eq!(candle.is_bullish, close - open > 0.0);
    }
}
