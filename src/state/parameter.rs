//! Meteorological parameter selection.

/// Parameters the rendering backend knows how to draw.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Parameter {
    Rain,
    #[default]
    Pm25,
    No2,
    O3,
    U10,
    V10,
    WindVector,
}

impl Parameter {
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Rain => "Curah Hujan",
            Parameter::Pm25 => "PM2.5",
            Parameter::No2 => "NO\u{2082}",
            Parameter::O3 => "O\u{2083}",
            Parameter::U10 => "U10 (Angin Barat-Timur)",
            Parameter::V10 => "V10 (Angin Utara-Selatan)",
            Parameter::WindVector => "Vektor Angin",
        }
    }

    /// Value sent in the `parameter` query field.
    pub fn query_value(&self) -> &'static str {
        match self {
            Parameter::Rain => "rain",
            Parameter::Pm25 => "pm25",
            Parameter::No2 => "no2",
            Parameter::O3 => "o3",
            Parameter::U10 => "u10",
            Parameter::V10 => "v10",
            Parameter::WindVector => "wind_vector",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.query_value() == value)
    }

    /// Whether a wind-vector overlay means anything on top of this parameter.
    pub fn supports_overlay(&self) -> bool {
        *self != Parameter::WindVector
    }

    pub fn all() -> &'static [Parameter] {
        &[
            Parameter::Rain,
            Parameter::Pm25,
            Parameter::No2,
            Parameter::O3,
            Parameter::U10,
            Parameter::V10,
            Parameter::WindVector,
        ]
    }
}

/// The chosen parameter and whether the wind overlay is requested.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParameterSelection {
    parameter: Parameter,
    include_wind: bool,
}

impl ParameterSelection {
    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    pub fn include_wind(&self) -> bool {
        self.include_wind
    }

    /// Selects a parameter. The overlay flag always resets.
    pub fn set_parameter(&mut self, parameter: Parameter) {
        self.parameter = parameter;
        self.include_wind = false;
    }

    /// Requests or clears the overlay.
    ///
    /// Returns `false` (leaving the flag untouched) when the current
    /// parameter does not accept an overlay.
    pub fn set_include_wind(&mut self, include_wind: bool) -> bool {
        if !self.parameter.supports_overlay() {
            return false;
        }
        self.include_wind = include_wind;
        true
    }
}
