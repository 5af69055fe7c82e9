mod band;
pub use band::Band;

mod band_series;
pub use band_series::BandSeries;

mod light_curve;
pub use light_curve::{LightCurve, deduplicate};

mod multi_band;
pub use multi_band::MultiBandSeries;

mod photopoint;
pub use photopoint::{Photopoint, UpperLimit};
