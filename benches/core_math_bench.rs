use candle_chart::api::{ChartConfig, ChartSurface};
use candle_chart::core::{
    CandleLayout, ScaleMapper, TradeSample, TradeSeries, ValueRange, VisibleWindow,
    project_candles,
};
use candle_chart::render::RecordingSurface;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_series(count: usize) -> TradeSeries {
    let samples: Vec<TradeSample> = (0..count)
        .map(|i| {
            let t = i as f64;
            let open = 100.0 + t * 0.05;
            let close = if i % 2 == 0 { open + 1.0 } else { open - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            TradeSample::new(
                1_700_000_000 + i as i64 * 60,
                open,
                high,
                low,
                close,
                1_000.0 + t,
            )
            .expect("valid generated sample")
        })
        .collect();
    TradeSeries::from_samples(&samples).expect("valid series")
}

fn bench_scale_mapping(c: &mut Criterion) {
    let range = ValueRange::new(0.0, 10_000.0).expect("valid range");
    let scale = ScaleMapper::new(range, 0.0, 370.0);

    c.bench_function("scale_mapper_map", |b| {
        b.iter(|| {
            let _ = scale.map(black_box(4_321.123));
        })
    });
}

fn bench_candle_projection_10k(c: &mut Criterion) {
    let series = generated_series(10_000);
    let window = VisibleWindow::trailing(&series, series.len());
    let scale = ScaleMapper::new(window.price_range().expect("range"), 0.0, 370.0);

    c.bench_function("candle_projection_10k", |b| {
        b.iter(|| {
            let _ = project_candles(
                black_box(window),
                black_box(scale),
                black_box(CandleLayout::default()),
                black_box(1920),
            );
        })
    });
}

fn bench_full_redraw_1920(c: &mut Criterion) {
    let mut chart = ChartSurface::new(RecordingSurface::new(), ChartConfig::default(), 1920)
        .expect("chart init");
    chart
        .data_ready(Ok(generated_series(2_000)))
        .expect("initial draw");

    c.bench_function("full_redraw_1920", |b| {
        b.iter(|| {
            let _ = chart.redraw().expect("redraw should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_mapping,
    bench_candle_projection_10k,
    bench_full_redraw_1920
);
criterion_main!(benches);
