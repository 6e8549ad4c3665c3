//! Generator policy: raw options and their validated form.

use thiserror::Error;

use crate::charset::CharClass;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("At least one character class must be enabled")]
    NoCharacterClass,
    #[error("Length {length} is shorter than the {required} enabled character classes")]
    LengthTooShort { length: usize, required: usize },
}

/// Generation options as supplied by a caller.
///
/// Turn into a [`GeneratorPolicy`] before generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Always in effect: the generator alphabets never contain similar glyphs.
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: true,
            exclude_ambiguous: false,
        }
    }
}

/// Validated generation policy.
///
/// Guarantees at least one enabled class and a length that fits one
/// character of every enabled class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolicy {
    length: usize,
    classes: Vec<CharClass>,
    exclude_similar: bool,
    exclude_ambiguous: bool,
}

impl GeneratorPolicy {
    pub fn new(options: GeneratorOptions) -> Result<Self, PolicyError> {
        let classes: Vec<CharClass> = [
            (options.include_lowercase, CharClass::Lowercase),
            (options.include_uppercase, CharClass::Uppercase),
            (options.include_numbers, CharClass::Number),
            (options.include_symbols, CharClass::Symbol),
        ]
        .into_iter()
        .filter_map(|(enabled, class)| enabled.then_some(class))
        .collect();

        if classes.is_empty() {
            return Err(PolicyError::NoCharacterClass);
        }
        if options.length < classes.len() {
            return Err(PolicyError::LengthTooShort {
                length: options.length,
                required: classes.len(),
            });
        }

        if !options.exclude_similar {
            #[cfg(feature = "tracing")]
            tracing::debug!("exclude_similar=false ignored: alphabets never contain similar glyphs");
        }

        Ok(Self {
            length: options.length,
            classes,
            exclude_similar: options.exclude_similar,
            exclude_ambiguous: options.exclude_ambiguous,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Enabled classes in lowercase, uppercase, numbers, symbols order.
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    pub fn exclude_similar(&self) -> bool {
        self.exclude_similar
    }

    pub fn exclude_ambiguous(&self) -> bool {
        self.exclude_ambiguous
    }
}

impl TryFrom<GeneratorOptions> for GeneratorPolicy {
    type Error = PolicyError;

    fn try_from(options: GeneratorOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}
