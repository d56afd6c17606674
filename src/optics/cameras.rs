//! Built-in circle-of-confusion table.
//!
//! Records are addressed by their position in [`CAMERAS`]; the position is
//! what the listing shows and what the selection prompt expects back.

use crate::constants::INVALID_SELECTION;

/// One camera body and the CoC (mm) used for its sensor format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRecord {
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub coc: f64,
}

const fn cam(
    manufacturer: &'static str,
    model: &'static str,
    coc: f64,
) -> CameraRecord {
    CameraRecord {
        manufacturer,
        model,
        coc,
    }
}

pub static CAMERAS: &[CameraRecord] = &[
    cam("Canon", "EOS 1D", 0.023),
    cam("Canon", "EOS 1D Mark II", 0.023),
    cam("Canon", "EOS 1D Mark III", 0.023),
    cam("Canon", "EOS 1Ds", 0.030),
    cam("Canon", "EOS 1Ds Mark II", 0.030),
    cam("Canon", "EOS 1Ds Mark III", 0.030),
    cam("Canon", "EOS 5D", 0.030),
    cam("Canon", "EOS 5D Mark II", 0.030),
    cam("Canon", "EOS 7D", 0.019),
    cam("Canon", "EOS 10D", 0.019),
    cam("Canon", "EOS 20D", 0.019),
    cam("Canon", "EOS 30D", 0.019),
    cam("Canon", "EOS 40D", 0.019),
    cam("Canon", "EOS 50D", 0.019),
    cam("Canon", "EOS Digital Rebel", 0.019),
    cam("Canon", "EOS Digital Rebel XT", 0.019),
    cam("Canon", "EOS Digital Rebel XTi", 0.019),
    cam("Canon", "EOS Rebel XS", 0.019),
    cam("Canon", "EOS Rebel XSi", 0.019),
    cam("Canon", "EOS Rebel T1i", 0.019),
    cam("Canon", "PowerShot G10", 0.006),
    cam("Canon", "PowerShot G11", 0.006),
    cam("Fujifilm", "FinePix S5 Pro", 0.020),
    cam("Fujifilm", "FinePix X100", 0.020),
    cam("Kodak", "DCS Pro 14n", 0.030),
    cam("Leica", "M8", 0.025),
    cam("Leica", "M9", 0.030),
    cam("Nikon", "D1", 0.020),
    cam("Nikon", "D2X", 0.020),
    cam("Nikon", "D3", 0.030),
    cam("Nikon", "D3X", 0.030),
    cam("Nikon", "D40", 0.020),
    cam("Nikon", "D50", 0.020),
    cam("Nikon", "D60", 0.020),
    cam("Nikon", "D70", 0.020),
    cam("Nikon", "D80", 0.020),
    cam("Nikon", "D90", 0.020),
    cam("Nikon", "D200", 0.020),
    cam("Nikon", "D300", 0.020),
    cam("Nikon", "D700", 0.030),
    cam("Nikon", "D5000", 0.020),
    cam("Olympus", "E-1", 0.015),
    cam("Olympus", "E-3", 0.015),
    cam("Olympus", "E-30", 0.015),
    cam("Olympus", "E-420", 0.015),
    cam("Olympus", "E-P1", 0.015),
    cam("Panasonic", "Lumix DMC-G1", 0.015),
    cam("Panasonic", "Lumix DMC-GH1", 0.015),
    cam("Panasonic", "Lumix DMC-L1", 0.015),
    cam("Pentax", "K10D", 0.020),
    cam("Pentax", "K20D", 0.020),
    cam("Pentax", "K-7", 0.020),
    cam("Pentax", "K-x", 0.020),
    cam("Sigma", "SD14", 0.019),
    cam("Sony", "Alpha DSLR-A100", 0.020),
    cam("Sony", "Alpha DSLR-A700", 0.020),
    cam("Sony", "Alpha DSLR-A850", 0.030),
    cam("Sony", "Alpha DSLR-A900", 0.030),
    cam("35mm film", "Full frame", 0.030),
    cam("Medium format", "6x4.5", 0.047),
    cam("Medium format", "6x6", 0.053),
    cam("Medium format", "6x7", 0.059),
    cam("Large format", "4x5", 0.100),
];

/// Read-only view over a camera table.
#[derive(Debug, Clone, Copy)]
pub struct CameraTable {
    records: &'static [CameraRecord],
}

impl Default for CameraTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CameraTable {
    pub fn builtin() -> Self {
        Self { records: CAMERAS }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&'static CameraRecord> {
        self.records.get(index)
    }

    /// Records whose manufacturer contains `maker` and whose model contains
    /// `model` (case-sensitive), in table order. `None` leaves a field
    /// unconstrained. The iterator is lazy; clone it to walk it again.
    pub fn list_matching<'a>(
        &self,
        maker: Option<&'a str>,
        model: Option<&'a str>,
    ) -> impl Iterator<Item = (usize, &'static CameraRecord)> + Clone + use<'a> {
        let records = self.records;
        records
            .iter()
            .enumerate()
            .filter(move |(_, rec)| {
                maker.is_none_or(|m| rec.manufacturer.contains(m))
                    && model.is_none_or(|m| rec.model.contains(m))
            })
    }

    /// CoC at `index`, or [`INVALID_SELECTION`] (negative) when out of range.
    pub fn coc_at(
        &self,
        index: i64,
    ) -> f64 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.get(i))
            .map_or(INVALID_SELECTION, |rec| rec.coc)
    }
}
