use candle_chart::core::{
    CandleLayout, SurfaceGeometry, TimeLabel, TradeSample, TradeSeries, VisibleWindow, VolumeBand,
    VolumeBar, WindowSelector,
};
use candle_chart::render::{
    ChartStyle, Color, DrawingSurface, FrameCommand, RecordingSurface, TextHAlign,
    draw_candle_pass, draw_grid, draw_time_labels, draw_volume_bar,
};

const GREEN: Color = Color::rgb8(0x00, 0x80, 0x00);
const RED: Color = Color::rgb8(0xff, 0x33, 0x00);

fn cleared_surface(width: u32) -> (RecordingSurface, SurfaceGeometry) {
    let geometry = SurfaceGeometry::new(width, 400);
    let mut surface = RecordingSurface::new();
    surface.clear(geometry).expect("clear");
    (surface, geometry)
}

#[test]
fn drawing_before_clear_is_rejected() {
    let mut surface = RecordingSurface::new();
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(10.0, 10.0);
    assert!(surface.stroke().is_err());
    assert!(surface.fill_rect(0.0, 0.0, 5.0, 5.0).is_err());
    assert!(
        surface
            .fill_text("12:00", 5.0, 5.0, 11.0, TextHAlign::Center)
            .is_err()
    );
}

#[test]
fn clear_rejects_zero_sized_geometry() {
    let mut surface = RecordingSurface::new();
    assert!(surface.clear(SurfaceGeometry::new(0, 400)).is_err());
    assert_eq!(surface.clear_count(), 0);
}

#[test]
fn clear_discards_previous_commands() {
    let (mut surface, geometry) = cleared_surface(800);
    surface.fill_rect(1.0, 1.0, 2.0, 2.0).expect("rect");
    assert!(!surface.frame().is_empty());

    surface.clear(geometry).expect("second clear");
    assert!(surface.frame().is_empty());
    assert_eq!(surface.frame().commands, vec![FrameCommand::Clear(geometry)]);
    assert_eq!(surface.clear_count(), 2);
}

#[test]
fn negative_rect_extents_are_normalized() {
    let (mut surface, _) = cleared_surface(800);
    surface.fill_rect(20.0, 100.0, -8.0, -30.0).expect("rect");
    let rect = surface.frame().rects().next().copied().expect("rect");
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (12.0, 70.0, 8.0, 30.0));
}

#[test]
fn out_of_range_global_alpha_is_ignored() {
    let (mut surface, _) = cleared_surface(800);
    surface.set_global_alpha(0.25);
    surface.set_global_alpha(1.5);
    surface.set_global_alpha(f64::NAN);
    assert_eq!(surface.global_alpha(), 0.25);
}

#[test]
fn grid_draws_one_line_per_interval_at_fixed_spacing() {
    let (mut surface, geometry) = cleared_surface(800);
    let selector = WindowSelector::default();
    let drawn = draw_grid(
        &mut surface,
        geometry,
        selector.density(800),
        selector.grid_spacing_px(),
        ChartStyle::default(),
    )
    .expect("grid");

    assert_eq!(drawn, 10);
    let xs: Vec<f64> = surface.frame().lines().map(|line| line.x1).collect();
    assert_eq!(xs, (0..10u32).map(|i| f64::from(i) * 80.0).collect::<Vec<_>>());
    for line in surface.frame().lines() {
        assert_eq!(line.x1, line.x2);
        assert_eq!(line.y1, 10.0);
        assert_eq!(line.y2, 370.0);
        assert_eq!(line.color, Color::rgb8(0xdd, 0xdd, 0xdd));
    }
}

#[test]
fn fractional_intervals_add_a_partial_grid_line() {
    let (mut surface, geometry) = cleared_surface(1000);
    let selector = WindowSelector::default();
    let drawn = draw_grid(
        &mut surface,
        geometry,
        selector.density(1000),
        selector.grid_spacing_px(),
        ChartStyle::default(),
    )
    .expect("grid");
    assert_eq!(drawn, 13);
    assert_eq!(surface.frame().lines().last().map(|line| line.x1), Some(960.0));
}

#[test]
fn time_labels_are_centered_on_their_slots() {
    let (mut surface, geometry) = cleared_surface(800);
    let labels = vec![
        TimeLabel {
            slot: 1,
            sample_index: 0,
            timestamp: 0,
            text: "09:00".to_owned(),
        },
        TimeLabel {
            slot: 4,
            sample_index: 9,
            timestamp: 540,
            text: "09:09".to_owned(),
        },
    ];
    let drawn = draw_time_labels(&mut surface, geometry, labels, 80.0, ChartStyle::default())
        .expect("labels");

    assert_eq!(drawn, 2);
    let texts: Vec<_> = surface.frame().texts().collect();
    assert_eq!(texts[0].text, "09:00");
    assert_eq!(texts[0].x, 80.0);
    assert_eq!(texts[0].y, 390.0);
    assert_eq!(texts[0].h_align, TextHAlign::Center);
    assert_eq!(texts[1].x, 320.0);
    assert_eq!(texts[1].color, Color::rgb8(0x33, 0x33, 0x33));
}

#[test]
fn time_label_on_the_right_edge_is_pulled_inside() {
    let (mut surface, geometry) = cleared_surface(800);
    let label = TimeLabel {
        slot: 10,
        sample_index: 0,
        timestamp: 0,
        text: "23:59".to_owned(),
    };
    draw_time_labels(&mut surface, geometry, [label], 80.0, ChartStyle::default())
        .expect("labels");

    let half_width = surface.measure_text("23:59", 11.0) / 2.0;
    let text = surface.frame().texts().next().expect("label");
    assert!(text.x < 800.0);
    assert!((text.x + half_width - 800.0).abs() < 1e-9);
}

#[test]
fn volume_bar_is_translucent_and_restores_alpha() {
    let (mut surface, _) = cleared_surface(800);
    let bar = VolumeBar {
        x: 716.0,
        y_top: 340.0,
        width: 8.0,
        height: 30.0,
    };
    draw_volume_bar(&mut surface, bar, GREEN, 0.5).expect("volume");

    assert_eq!(surface.global_alpha(), 1.0);
    let rect = surface.frame().rects().next().copied().expect("rect");
    assert_eq!(rect.fill_color, GREEN.with_alpha_factor(0.5));
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (716.0, 340.0, 8.0, 30.0));
}

#[test]
fn candle_pass_orders_wick_body_then_volume() {
    let series = TradeSeries::from_samples(&[
        TradeSample::new(0, 10.0, 25.0, 5.0, 20.0, 100.0).expect("bull"),
        TradeSample::new(60, 20.0, 22.0, 12.0, 15.0, 50.0).expect("bear"),
    ])
    .expect("valid series");
    let (mut surface, geometry) = cleared_surface(800);
    let drawn = draw_candle_pass(
        &mut surface,
        VisibleWindow::trailing(&series, 70),
        geometry,
        CandleLayout::default(),
        VolumeBand::default(),
        ChartStyle::default(),
    )
    .expect("candle pass");

    assert_eq!(drawn, 2);
    let commands = &surface.frame().commands[1..];
    assert_eq!(commands.len(), 6);

    // Newest (bearish) candle first.
    match (&commands[0], &commands[1], &commands[2]) {
        (FrameCommand::Line(wick), FrameCommand::Rect(body), FrameCommand::Rect(volume)) => {
            assert_eq!(wick.x1, 720.0);
            assert_eq!(wick.color, RED);
            assert_eq!(body.x, 716.0);
            assert_eq!(body.width, 8.0);
            assert_eq!(body.fill_color, RED);
            assert_eq!(volume.fill_color, RED.with_alpha_factor(0.5));
            // Volume 50 against a window peak of 100 fills half the band.
            assert_eq!(volume.height, 30.0);
            assert_eq!(volume.y, 340.0);
        }
        other => panic!("unexpected command order: {other:?}"),
    }
    match (&commands[3], &commands[4], &commands[5]) {
        (FrameCommand::Line(wick), FrameCommand::Rect(body), FrameCommand::Rect(volume)) => {
            assert_eq!(wick.x1, 710.0);
            assert_eq!(wick.color, GREEN);
            assert_eq!(body.fill_color, GREEN);
            assert_eq!(volume.fill_color, GREEN.with_alpha_factor(0.5));
        }
        other => panic!("unexpected command order: {other:?}"),
    }
    assert_eq!(surface.global_alpha(), 1.0);
}

#[test]
fn volume_bars_keep_their_ratio_when_volumes_sit_far_above_zero() {
    let samples: Vec<TradeSample> = [900.0, 950.0, 1000.0]
        .into_iter()
        .enumerate()
        .map(|(i, volume)| {
            TradeSample::new(i as i64 * 60, 10.0, 12.0, 9.0, 11.0, volume).expect("sample")
        })
        .collect();
    let series = TradeSeries::from_samples(&samples).expect("valid series");
    let (mut surface, geometry) = cleared_surface(800);
    draw_candle_pass(
        &mut surface,
        VisibleWindow::trailing(&series, 70),
        geometry,
        CandleLayout::default(),
        VolumeBand::default(),
        ChartStyle::default(),
    )
    .expect("candle pass");

    // Every candle draws wick, body, volume; the pass runs newest first.
    let heights: Vec<f64> = surface.frame().commands[1..]
        .chunks(3)
        .map(|triple| match &triple[2] {
            FrameCommand::Rect(volume) => volume.height,
            other => panic!("expected volume rect, got {other:?}"),
        })
        .collect();
    assert_eq!(heights.len(), 3);
    assert_eq!(heights[0], 60.0);
    assert!(heights[0] > heights[1] && heights[1] > heights[2]);
    assert!((heights[1] - 57.0).abs() < 1e-9);
    assert!((heights[2] - 54.0).abs() < 1e-9);
}

#[test]
fn empty_window_draws_nothing() {
    let series = TradeSeries::default();
    let (mut surface, geometry) = cleared_surface(800);
    let drawn = draw_candle_pass(
        &mut surface,
        VisibleWindow::trailing(&series, 70),
        geometry,
        CandleLayout::default(),
        VolumeBand::default(),
        ChartStyle::default(),
    )
    .expect("candle pass");
    assert_eq!(drawn, 0);
    assert!(surface.frame().is_empty());
}

#[test]
fn recorded_frame_replays_identically() {
    let series = TradeSeries::from_samples(&[
        TradeSample::new(0, 10.0, 12.0, 9.0, 11.0, 5.0).expect("sample"),
        TradeSample::new(60, 11.0, 13.0, 10.0, 10.5, 7.0).expect("sample"),
    ])
    .expect("valid series");
    let (mut surface, geometry) = cleared_surface(640);
    draw_candle_pass(
        &mut surface,
        VisibleWindow::trailing(&series, 70),
        geometry,
        CandleLayout::default(),
        VolumeBand::default(),
        ChartStyle::default(),
    )
    .expect("candle pass");
    let frame = surface.into_frame();
    frame.validate().expect("valid frame");

    let mut replayed = RecordingSurface::new();
    frame.replay(&mut replayed).expect("replay");
    assert_eq!(replayed.frame(), &frame);
    assert_eq!(replayed.global_alpha(), 1.0);
}
