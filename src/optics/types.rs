use super::units::{DistanceUnit, Measurement};
use crate::error::DofError;

/// Everything the calculator needs, already in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DofRequest {
    pub coc: f64,
    pub focal_length_mm: f64,
    pub near_mm: f64,
    /// `f64::INFINITY` when no far limit was given.
    pub far_mm: f64,
}

impl DofRequest {
    pub fn new(
        coc: f64,
        focal_length_mm: f64,
        near_mm: f64,
        far_mm: f64,
    ) -> Self {
        Self {
            coc,
            focal_length_mm,
            near_mm,
            far_mm,
        }
    }

    pub fn is_hyperfocal(&self) -> bool {
        self.far_mm == f64::INFINITY
    }
}

/// Positional distances normalised to millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceArgs {
    pub focal_length_mm: f64,
    pub near_mm: f64,
    pub far_mm: f64,
}

impl DistanceArgs {
    /// Parse `FOCAL NEAR [FAR]`. Focal length defaults to millimetres,
    /// near and far to `default_unit`; a suffix overrides either.
    pub fn parse(
        positionals: &[String],
        default_unit: DistanceUnit,
    ) -> Result<Self, DofError> {
        let (focal, near, far) = match positionals {
            [focal, near] => (focal, near, None),
            [focal, near, far] => (focal, near, Some(far)),
            [] | [_] => {
                return Err(DofError::MissingRequiredArguments(
                    "focal length and near distance are required".into(),
                ));
            }
            _ => {
                return Err(DofError::MissingRequiredArguments(
                    "too many positional arguments".into(),
                ));
            }
        };
        let focal = Measurement::parse(focal, DistanceUnit::Millimetres)?;
        let near = Measurement::parse(near, default_unit)?;
        let far = match far {
            Some(far) => Measurement::parse(far, default_unit)?,
            None => Measurement::new(f64::INFINITY, default_unit),
        };
        Ok(Self {
            focal_length_mm: focal.to_mm(),
            near_mm: near.to_mm(),
            far_mm: far.to_mm(),
        })
    }

    pub fn with_coc(
        self,
        coc: f64,
    ) -> DofRequest {
        DofRequest::new(coc, self.focal_length_mm, self.near_mm, self.far_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_far_is_hyperfocal() {
        let d = DistanceArgs::parse(&args(&["55", "660"]), DistanceUnit::Millimetres).unwrap();
        let req = d.with_coc(0.019);
        assert!(req.is_hyperfocal());
        assert_eq!(req.near_mm, 660.0);
    }

    #[test]
    fn default_unit_applies_to_near_and_far_only() {
        let d = DistanceArgs::parse(&args(&["50", "8", "10"]), DistanceUnit::Feet).unwrap();
        assert_eq!(d.focal_length_mm, 50.0);
        assert_eq!(d.near_mm, 8.0 * 304.8);
        assert_eq!(d.far_mm, 10.0 * 304.8);
    }

    #[test]
    fn suffix_overrides_per_argument() {
        let d = DistanceArgs::parse(&args(&["5c", "2M", "300c"]), DistanceUnit::Inches).unwrap();
        assert_eq!(d.focal_length_mm, 50.0);
        assert_eq!(d.near_mm, 2000.0);
        assert_eq!(d.far_mm, 3000.0);
    }

    #[test]
    fn explicit_inf_far() {
        let d = DistanceArgs::parse(&args(&["55", "660m", "inf"]), DistanceUnit::Inches).unwrap();
        assert!(d.far_mm.is_infinite());
    }

    #[test]
    fn missing_or_bad_required_args() {
        for bad in [&[][..], &["55"][..], &["x", "660"][..], &["55", "near"][..]] {
            let err = DistanceArgs::parse(&args(bad), DistanceUnit::Inches).unwrap_err();
            assert!(matches!(err, DofError::MissingRequiredArguments(_)), "{bad:?}");
        }
    }
}
