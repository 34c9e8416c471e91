use showcase_kit::transition::{
    Direction, Easing, FlyAndScale, TransitionConfig, remap, sample,
};
use std::time::Duration;

fn parse_motion(transform: &str) -> (f64, f64, f64) {
    let inner = transform
        .split("translate3d(")
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .expect("translate3d present");
    let mut parts = inner.split(", ");
    let x = parts.next().unwrap().trim_end_matches("px").parse().unwrap();
    let y = parts.next().unwrap().trim_end_matches("px").parse().unwrap();
    let scale = transform
        .split("scale(")
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .expect("scale present")
        .parse()
        .unwrap();
    (x, y, scale)
}

#[test]
fn test_documented_start_sample() {
    let config = TransitionConfig::default()
        .with_vertical_offset(-8.0)
        .with_horizontal_offset(0.0)
        .with_start_scale(0.95)
        .with_duration_ms(150);
    let snapshot = sample(&config, 0.0, "");
    assert!(snapshot.transform.contains("translate3d(0px, -8px, 0) scale(0.95)"));
    assert_eq!(snapshot.opacity, 0.0);
}

#[test]
fn test_settled_sample_with_base() {
    let snapshot = sample(&TransitionConfig::default(), 1.0, "translateX(10px)");
    assert_eq!(snapshot.transform, "translateX(10px) translate3d(0px, 0px, 0) scale(1)");
    assert_eq!(snapshot.opacity, 1.0);
}

#[test]
fn test_referential_transparency() {
    let config = TransitionConfig::default().with_horizontal_offset(12.0);
    for step in 0..=20 {
        let t = f64::from(step) / 20.0;
        assert_eq!(sample(&config, t, "none"), sample(&config, t, "none"));
    }
}

#[test]
fn test_each_axis_monotonic() {
    let config = TransitionConfig::default()
        .with_vertical_offset(-24.0)
        .with_horizontal_offset(16.0)
        .with_start_scale(0.5);

    let mut previous = parse_motion(&sample(&config, 0.0, "").transform);
    for step in 1..=100 {
        let t = f64::from(step) / 100.0;
        let current = parse_motion(&sample(&config, t, "").transform);
        assert!(current.0 <= previous.0, "x must fall toward 0 at t={t}");
        assert!(current.1 >= previous.1, "y must rise toward 0 at t={t}");
        assert!(current.2 >= previous.2, "scale must rise toward 1 at t={t}");
        previous = current;
    }
    assert_eq!(previous, (0.0, 0.0, 1.0));
}

#[test]
fn test_config_from_short_json_keys() {
    let config: TransitionConfig = serde_json::from_str(r#"{"y": 4, "duration": 300}"#).unwrap();
    assert_eq!(config.vertical_offset(), 4.0);
    assert_eq!(config.horizontal_offset(), 0.0);
    assert_eq!(config.start_scale(), 0.95);
    assert_eq!(config.duration(), Duration::from_millis(300));
}

#[test]
fn test_driver_progress_is_monotonic_and_completes() {
    let transition = FlyAndScale::new(TransitionConfig::default(), "none");
    assert_eq!(transition.easing(), Easing::CubicOut);
    assert_eq!(transition.delay(), Duration::ZERO);

    let mut last = -1.0;
    for ms in 0..=200 {
        let progress = transition.progress_at(Duration::from_millis(ms), Direction::In);
        assert!(progress >= last);
        last = progress;
    }
    assert_eq!(last, 1.0);
    assert!(transition.is_finished(Duration::from_millis(150)));
    assert!(!transition.is_finished(Duration::from_millis(149)));
}

#[test]
fn test_exit_timeline_fades_out() {
    let transition = FlyAndScale::new(TransitionConfig::default(), "").with_easing(Easing::Linear);
    let frames = transition.timeline(Duration::from_millis(50), Direction::Out);
    let opacities: Vec<f64> = frames.iter().map(|(_, s)| s.opacity).collect();
    assert_eq!(opacities.first(), Some(&1.0));
    assert_eq!(opacities.last(), Some(&0.0));
    assert!(opacities.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(
        frames.last().unwrap().1.to_css(),
        "transform:translate3d(0px, -8px, 0) scale(0.95);opacity:0;"
    );
}

#[test]
fn test_remap_matches_interpolation() {
    let config = TransitionConfig::default();
    let snapshot = sample(&config, 0.4, "");
    let (_, y, scale) = parse_motion(&snapshot.transform);
    assert_eq!(y, remap(0.4, (0.0, 1.0), (-8.0, 0.0)));
    assert_eq!(scale, remap(0.4, (0.0, 1.0), (0.95, 1.0)));
}
