use super::types::DofRequest;

/// f-number needed so that everything from `near_mm` to `far_mm` is
/// acceptably sharp. `far_mm == f64::INFINITY` selects hyperfocal mode.
///
/// The result is an aperture, not a distance. Nothing is validated here:
/// a zero `near_mm` yields whatever IEEE arithmetic gives (inf or NaN).
pub fn compute_factor(
    coc: f64,
    focal_length_mm: f64,
    near_mm: f64,
    far_mm: f64,
) -> f64 {
    let mut n = focal_length_mm * focal_length_mm / coc;
    if far_mm == f64::INFINITY {
        n /= 2.0 * near_mm;
    } else {
        n *= (far_mm - near_mm) / (2.0 * far_mm * near_mm);
    }
    n
}

impl DofRequest {
    pub fn factor(&self) -> f64 {
        compute_factor(self.coc, self.focal_length_mm, self.near_mm, self.far_mm)
    }
}
