use crate::optics::cameras::CameraRecord;
use crate::optics::types::DofRequest;

/// Shortest round-trip rendering, with `inf`/`nan` spelled the C way.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        (if v > 0.0 { "inf" } else { "-inf" }).to_string()
    } else {
        format!("{v}")
    }
}

/// `[<coc>](<focal> <near> <far>) => <factor>`
pub fn format_result(
    request: &DofRequest,
    factor: f64,
) -> String {
    format!(
        "[{}]({} {} {}) => {}",
        format_number(request.coc),
        format_number(request.focal_length_mm),
        format_number(request.near_mm),
        format_number(request.far_mm),
        format_number(factor)
    )
}

pub fn format_listing_line(
    index: usize,
    camera: &CameraRecord,
) -> String {
    format!(
        "  {index}: \"{}\" \"{}\" {}",
        camera.manufacturer,
        camera.model,
        format_number(camera.coc)
    )
}
