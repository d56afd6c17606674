use crate::error::DofError;

/// Linear units accepted for distances on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Inches,
    Feet,
    Millimetres,
    Centimetres,
    Metres,
}

impl DistanceUnit {
    /// Millimetres per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            DistanceUnit::Inches => 25.4,
            DistanceUnit::Feet => 304.8,
            DistanceUnit::Millimetres => 1.0,
            DistanceUnit::Centimetres => 10.0,
            DistanceUnit::Metres => 1000.0,
        }
    }

    /// Single-letter unit code as used in distance suffixes (`10f`, `2M`).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'i' => Some(DistanceUnit::Inches),
            'f' => Some(DistanceUnit::Feet),
            'm' => Some(DistanceUnit::Millimetres),
            'c' => Some(DistanceUnit::Centimetres),
            'M' => Some(DistanceUnit::Metres),
            _ => None,
        }
    }
}

/// Convert `value` in `unit` to millimetres.
#[inline]
pub fn convert(
    value: f64,
    unit: DistanceUnit,
) -> f64 {
    value * unit.factor()
}

/// A distance as typed by the user, before normalisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Measurement {
    pub fn new(
        value: f64,
        unit: DistanceUnit,
    ) -> Self {
        Self { value, unit }
    }

    pub fn to_mm(self) -> f64 {
        convert(self.value, self.unit)
    }

    /// Parse `"<number>[suffix]"`. Only the first suffix character is
    /// significant, so `ft`, `in`, `mm` and `cm` all read naturally.
    /// Without a suffix `default_unit` applies.
    pub fn parse(
        text: &str,
        default_unit: DistanceUnit,
    ) -> Result<Self, DofError> {
        let text = text.trim();
        let (value, suffix) = split_number(text)
            .ok_or_else(|| DofError::MissingRequiredArguments(format!("not a number: {text:?}")))?;
        let unit = match suffix.chars().next() {
            None => default_unit,
            Some(code) => DistanceUnit::from_code(code).ok_or_else(|| {
                DofError::MissingRequiredArguments(format!("unknown unit suffix in {text:?}"))
            })?,
        };
        Ok(Self::new(value, unit))
    }
}

/// Split `text` into the longest leading float literal and the remainder.
pub(crate) fn split_number(text: &str) -> Option<(f64, &str)> {
    text.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| {
            text[..end]
                .parse::<f64>()
                .ok()
                .map(|value| (value, &text[end..]))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_match_table() {
        assert_eq!(convert(1.0, DistanceUnit::Feet), 304.8);
        assert_eq!(convert(1.0, DistanceUnit::Inches), 25.4);
        assert_eq!(convert(3.0, DistanceUnit::Centimetres), 30.0);
        assert_eq!(convert(2.5, DistanceUnit::Metres), 2500.0);
        assert_eq!(convert(42.0, DistanceUnit::Millimetres), 42.0);
    }

    #[test]
    fn infinity_stays_infinite() {
        assert!(convert(f64::INFINITY, DistanceUnit::Feet).is_infinite());
    }

    #[test]
    fn parse_without_suffix_uses_default() {
        let m = Measurement::parse("26", DistanceUnit::Inches).unwrap();
        assert_eq!(m, Measurement::new(26.0, DistanceUnit::Inches));
    }

    #[test]
    fn parse_suffixes() {
        let cases = [
            ("10ft", DistanceUnit::Feet, 10.0),
            ("10f", DistanceUnit::Feet, 10.0),
            ("26in", DistanceUnit::Inches, 26.0),
            ("660mm", DistanceUnit::Millimetres, 660.0),
            ("66cm", DistanceUnit::Centimetres, 66.0),
            ("2M", DistanceUnit::Metres, 2.0),
            ("1.5e3m", DistanceUnit::Millimetres, 1500.0),
        ];
        for (text, unit, value) in cases {
            let m = Measurement::parse(text, DistanceUnit::Inches).unwrap();
            assert_eq!(m.unit, unit, "{text}");
            assert_eq!(m.value, value, "{text}");
        }
    }

    #[test]
    fn parse_infinity() {
        let m = Measurement::parse("inf", DistanceUnit::Feet).unwrap();
        assert!(m.value.is_infinite());
        assert_eq!(m.unit, DistanceUnit::Feet);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Measurement::parse("abc", DistanceUnit::Inches),
            Err(DofError::MissingRequiredArguments(_))
        ));
        assert!(matches!(
            Measurement::parse("12x", DistanceUnit::Inches),
            Err(DofError::MissingRequiredArguments(_))
        ));
        assert!(Measurement::parse("", DistanceUnit::Inches).is_err());
    }
}
