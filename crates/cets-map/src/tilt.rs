//! Tilt-angle bounds shared by the imaging and tomography categories.

use cets_model::{Scalar, TiltImage};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TiltRange<'a> {
    pub min: Option<&'a Scalar>,
    pub max: Option<&'a Scalar>,
}

/// Smallest and largest numeric `nominal_tilt_angle`.
///
/// Images without a numeric angle do not take part. On ties the first image
/// wins, so the source representation of that angle is kept.
pub(crate) fn tilt_range(images: &[TiltImage]) -> TiltRange<'_> {
    let mut range = TiltRange::default();
    let mut bounds: Option<(f64, f64)> = None;
    for angle in images.iter().filter_map(|image| image.nominal_tilt_angle.as_ref()) {
        let Some(value) = angle.as_f64() else {
            continue;
        };
        match bounds {
            None => {
                bounds = Some((value, value));
                range.min = Some(angle);
                range.max = Some(angle);
            }
            Some((low, high)) => {
                if value < low {
                    bounds = Some((value, high));
                    range.min = Some(angle);
                } else if value > high {
                    bounds = Some((low, value));
                    range.max = Some(angle);
                }
            }
        }
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(json: &str) -> Vec<TiltImage> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn bounds_over_numeric_angles() {
        let images = images(
            r#"[{"nominal_tilt_angle": 0}, {"nominal_tilt_angle": -10},
                {}, {"nominal_tilt_angle": 25}, {"nominal_tilt_angle": null}]"#,
        );
        let range = tilt_range(&images);
        assert_eq!(range.min.map(ToString::to_string).as_deref(), Some("-10"));
        assert_eq!(range.max.map(ToString::to_string).as_deref(), Some("25"));
    }

    #[test]
    fn no_angles_gives_no_bounds() {
        let images = images(r#"[{}, {"nominal_tilt_angle": "n/a"}]"#);
        let range = tilt_range(&images);
        assert!(range.min.is_none());
        assert!(range.max.is_none());
    }

    #[test]
    fn single_angle_is_both_bounds() {
        let images = images(r#"[{"nominal_tilt_angle": 3.5}]"#);
        let range = tilt_range(&images);
        assert_eq!(range.min, range.max);
    }
}
