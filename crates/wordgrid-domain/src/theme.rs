use std::fmt;
use std::str::FromStr;
use wordgrid_core::WordGridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Stored value to mode. Anything but "dark" reads as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = WordGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(WordGridError::Validation(format!(
                "Unknown theme mode: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("purple")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("Dark".parse::<ThemeMode>().is_err());
    }
}
