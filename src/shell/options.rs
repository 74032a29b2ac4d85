use std::fmt;

/// Display settings for the text shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    /// Draw pieces as Unicode glyphs instead of FEN letters
    pub glyphs: bool,
    /// Draw the board from Black's side
    pub flip: bool,
    /// Label ranks and files
    pub coordinates: bool,
}

/// Error type for `set` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}' (expected on/off)")
            }
        }
    }
}

impl std::error::Error for OptionError {}

impl Default for ShellOptions {
    fn default() -> Self {
        ShellOptions {
            glyphs: true,
            flip: false,
            coordinates: true,
        }
    }
}

impl ShellOptions {
    #[must_use]
    pub fn new() -> Self {
        ShellOptions::default()
    }

    /// Change one option by name. A missing value toggles it.
    pub fn apply_set(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let slot = match normalized.as_str() {
            "glyphs" | "unicode" => &mut self.glyphs,
            "flip" => &mut self.flip,
            "coordinates" | "coords" => &mut self.coordinates,
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        };
        *slot = match value {
            None => !*slot,
            Some(v) => parse_switch(v).ok_or_else(|| OptionError::InvalidValue {
                name: normalized.clone(),
                value: v.to_string(),
            })?,
        };
        log::debug!("option {normalized} set to {}", *slot);
        Ok(())
    }

    /// One `name value` line per option.
    #[must_use]
    pub fn describe(&self) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" };
        format!(
            "glyphs {}\nflip {}\ncoordinates {}\n",
            on_off(self.glyphs),
            on_off(self.flip),
            on_off(self.coordinates)
        )
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
