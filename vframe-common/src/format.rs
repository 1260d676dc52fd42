//! Output frame formats

use serde::Serialize;

/// Output resolution preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Format {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Format {
    pub const fn new(label: &'static str, width: u32, height: u32) -> Self {
        Self {
            label,
            width,
            height,
        }
    }

    /// Look up a preset by label
    pub fn by_label(label: &str) -> Option<Format> {
        FORMATS.iter().copied().find(|f| f.label == label)
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

impl Default for Format {
    fn default() -> Self {
        FORMATS[0]
    }
}

/// Available presets. Labels are unique.
pub const FORMATS: [Format; 2] = [
    Format::new("1920x1080", 1920, 1080),
    Format::new("1080x1920", 1080, 1920),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_unique_and_sizes_positive() {
        for (i, a) in FORMATS.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for b in &FORMATS[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn test_by_label() {
        let portrait = Format::by_label("1080x1920").unwrap();
        assert_eq!((portrait.width, portrait.height), (1080, 1920));
        assert!(portrait.is_portrait());
        assert_eq!(Format::by_label("640x480"), None);
    }

    #[test]
    fn test_default_is_first_preset() {
        assert_eq!(Format::default(), FORMATS[0]);
        assert!(!Format::default().is_portrait());
    }
}
