use criterion::{BatchSize, Criterion};
use light_curve_trend::{LightCurve, Photopoint, TrendAnalyzer, UpperLimit};
use light_curve_trend_test_util::{SYNTHETIC_LIGHT_CURVES, SyntheticLightCurve};
use std::hint::black_box;

fn light_curve(synthetic: &SyntheticLightCurve) -> LightCurve<f64> {
    LightCurve::new(
        synthetic
            .detections
            .iter()
            .map(|&(t, band, mag, err, quality)| Photopoint::new(t, band, mag, err, quality))
            .collect(),
        synthetic
            .upper_limits
            .iter()
            .map(|&(t, band, limiting_mag)| UpperLimit::new(t, band, limiting_mag))
            .collect(),
    )
}

pub fn bench_analyzer(c: &mut Criterion) {
    let analyzers = [
        ("default", TrendAnalyzer::default()),
        (
            "cubic, no colors",
            TrendAnalyzer::from_json(r#"{"max_order": 3, "calculate_color": false}"#).unwrap(),
        ),
    ];
    for (name, synthetic) in SYNTHETIC_LIGHT_CURVES.iter() {
        let lc = light_curve(synthetic);
        let now = synthetic.last_time();
        for (analyzer_name, analyzer) in analyzers.iter() {
            c.bench_function(&format!("analyze {name}: {analyzer_name}"), |b| {
                b.iter_batched(
                    || lc.clone(),
                    |lc| analyzer.analyze_at(black_box(&lc), now),
                    BatchSize::SmallInput,
                );
            });
        }
    }
}
