use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Julian date of the first synthetic observation, 2019 May 1
pub const JD_START: f64 = 2_458_604.5;

/// `(time, band, mag, mag_err, quality)`
pub type DetectionRecord = (f64, u8, f64, f64, f64);

/// `(time, band, limiting_mag)`
pub type UpperLimitRecord = (f64, u8, f64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyntheticLightCurve {
    pub detections: Vec<DetectionRecord>,
    pub upper_limits: Vec<UpperLimitRecord>,
}

impl SyntheticLightCurve {
    pub fn last_time(&self) -> f64 {
        self.detections
            .iter()
            .map(|&(t, ..)| t)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn bands(&self) -> Vec<u8> {
        self.detections
            .iter()
            .map(|&(_, band, ..)| band)
            .sorted()
            .dedup()
            .collect()
    }
}

/// Band `b` is observed `0.01 * b` days after the nominal epoch, so bands form colors
fn band_epoch(band: u8, i: usize, cadence: f64) -> f64 {
    JD_START + cadence * i as f64 + 0.01 * f64::from(band)
}

/// Noiseless magnitudes changing linearly with time, the redder the band the fainter the source
pub fn linear_light_curve(
    bands: &[u8],
    n: usize,
    cadence: f64,
    mag0: f64,
    slope_per_day: f64,
    err: f64,
) -> SyntheticLightCurve {
    let detections = bands
        .iter()
        .cartesian_product(0..n)
        .map(|(&band, i)| {
            let t = band_epoch(band, i, cadence);
            let mag = mag0 + 0.2 * f64::from(band - 1) + slope_per_day * (t - JD_START);
            (t, band, mag, err, 1.0)
        })
        .collect();
    SyntheticLightCurve {
        detections,
        upper_limits: vec![],
    }
}

/// Constant source with Gaussian noise matching the reported errors
pub fn noisy_flat_light_curve(
    seed: u64,
    bands: &[u8],
    n: usize,
    mag: f64,
    err: f64,
) -> SyntheticLightCurve {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, err).expect("error must be finite and non-negative");
    let detections = bands
        .iter()
        .cartesian_product(0..n)
        .map(|(&band, i)| {
            let t = band_epoch(band, i, 1.0);
            (t, band, mag + noise.sample(&mut rng), err, 0.9)
        })
        .collect();
    SyntheticLightCurve {
        detections,
        upper_limits: vec![],
    }
}

/// Quiescent blazar which starts a flare, getting brighter and bluer
///
/// g and r are observed every night for 40 nights. The flare starts on night 30 and the g band
/// brightens twice as fast as the r band. Non-detections precede the first detection.
pub fn flaring_blazar(seed: u64) -> SyntheticLightCurve {
    const N: usize = 40;
    const FLARE_START: usize = 30;
    const ERR: f64 = 0.03;

    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, ERR).expect("error must be finite and non-negative");
    let detections = [(1_u8, 16.8, 0.12), (2, 16.3, 0.06)]
        .into_iter()
        .cartesian_product(0..N)
        .map(|((band, quiescent, rate), i)| {
            let t = band_epoch(band, i, 1.0);
            let flare = rate * i.saturating_sub(FLARE_START) as f64;
            (t, band, quiescent - flare + noise.sample(&mut rng), ERR, 0.95)
        })
        .collect();
    let upper_limits = (1..=3)
        .cartesian_product([1_u8, 2])
        .map(|(days_before, band)| (JD_START - days_before as f64, band, 19.5))
        .collect();
    SyntheticLightCurve {
        detections,
        upper_limits,
    }
}

/// Every detection is repeated with a lower quality score and a spurious magnitude
pub fn duplicated_exposures(light_curve: &SyntheticLightCurve) -> SyntheticLightCurve {
    let detections = light_curve
        .detections
        .iter()
        .flat_map(|&(t, band, mag, err, quality)| {
            [
                (t, band, mag + 1.0, err, 0.5 * quality),
                (t, band, mag, err, quality),
                (t, band, mag - 1.0, err, quality),
            ]
        })
        .collect();
    SyntheticLightCurve {
        detections,
        upper_limits: light_curve.upper_limits.clone(),
    }
}
