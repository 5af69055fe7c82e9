use crate::synthetic::*;

use lazy_static::lazy_static;

pub type SyntheticEntry = (String, SyntheticLightCurve);

lazy_static! {
    /// Named synthetic light curves covering the typical shapes
    pub static ref SYNTHETIC_LIGHT_CURVES: Vec<SyntheticEntry> = {
        let mut v = vec![
            (
                "brightening_g".to_owned(),
                linear_light_curve(&[1], 5, 1.0, 18.0, -0.2, 0.05),
            ),
            (
                "fading_gri".to_owned(),
                linear_light_curve(&[1, 2, 3], 12, 2.0, 17.0, 0.05, 0.05),
            ),
            (
                "two_points_gr".to_owned(),
                linear_light_curve(&[1, 2], 2, 10.0, 18.0, -0.01, 0.5),
            ),
            ("flaring_blazar".to_owned(), flaring_blazar(0)),
            (
                "flaring_blazar_duplicated".to_owned(),
                duplicated_exposures(&flaring_blazar(1)),
            ),
        ];
        v.extend((0..5).map(|seed| {
            (
                format!("noisy_flat_{seed}"),
                noisy_flat_light_curve(seed, &[1, 2], 30, 17.5, 0.1),
            )
        }));
        v
    };
}
