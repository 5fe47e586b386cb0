use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::locale::{LocaleTag, normalize};

/// A selectable entry pairing a locale-specific label with an opaque value.
/// The label is what a tab or selector control renders; the value is
/// forwarded unchanged to whatever consumes the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> LabeledOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<T> fmt::Display for LabeledOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Error type for option catalog validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No sequence was supplied for the designated default locale.
    #[error("No option sequence for default locale \"{0}\"")]
    MissingDefaultLocale(LocaleTag),

    /// The same value appears twice within one locale's sequence.
    #[error("Duplicate value {value} in locale \"{locale}\"")]
    DuplicateValue { locale: LocaleTag, value: String },

    /// A value present in the default locale's sequence is absent here.
    #[error("Locale \"{locale}\" is missing value {value} present in \"{reference}\"")]
    MissingValue {
        locale: LocaleTag,
        reference: LocaleTag,
        value: String,
    },

    /// A value absent from the default locale's sequence appears here.
    #[error("Locale \"{locale}\" has extra value {value} absent from \"{reference}\"")]
    ExtraValue {
        locale: LocaleTag,
        reference: LocaleTag,
        value: String,
    },
}

/// Per-locale ordered sequences of labeled options backing a tab or
/// selector control. Only labels vary by locale; the set of values is the
/// same in every sequence, checked once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalog<T> {
    sequences: BTreeMap<LocaleTag, Vec<LabeledOption<T>>>,
    default_locale: LocaleTag,
}

impl<T> OptionCatalog<T>
where
    T: PartialEq + fmt::Debug,
{
    /// Builds a catalog from static per-locale sequences, validating that
    /// the default locale is present, that values are unique within each
    /// sequence, and that every sequence carries the same value set as the
    /// default locale's.
    ///
    /// # Errors
    /// Returns the first `CatalogError` violation found.
    pub fn new<L, S>(default_locale: L, sequences: S) -> Result<Self, CatalogError>
    where
        L: Into<LocaleTag>,
        S: IntoIterator<Item = (LocaleTag, Vec<LabeledOption<T>>)>,
    {
        let default_locale = default_locale.into();
        let sequences: BTreeMap<_, _> = sequences.into_iter().collect();

        let reference = sequences
            .get(&default_locale)
            .ok_or_else(|| CatalogError::MissingDefaultLocale(default_locale.clone()))?;

        for (locale, sequence) in &sequences {
            for (idx, option) in sequence.iter().enumerate() {
                if sequence[..idx].iter().any(|o| o.value == option.value) {
                    return Err(CatalogError::DuplicateValue {
                        locale: locale.clone(),
                        value: format!("{:?}", option.value),
                    });
                }
            }

            for option in reference {
                if !sequence.iter().any(|o| o.value == option.value) {
                    return Err(CatalogError::MissingValue {
                        locale: locale.clone(),
                        reference: default_locale.clone(),
                        value: format!("{:?}", option.value),
                    });
                }
            }

            for option in sequence {
                if !reference.iter().any(|o| o.value == option.value) {
                    return Err(CatalogError::ExtraValue {
                        locale: locale.clone(),
                        reference: default_locale.clone(),
                        value: format!("{:?}", option.value),
                    });
                }
            }
        }

        Ok(Self {
            sequences,
            default_locale,
        })
    }
}

impl<T> OptionCatalog<T> {
    /// Returns the sequence for `tag`, normalized to its base language.
    /// Falls back to the default locale's sequence when the normalized tag
    /// has no entry. Total over all inputs.
    pub fn options(&self, tag: &str) -> &[LabeledOption<T>] {
        self.sequences
            .get(normalize(tag))
            .or_else(|| self.sequences.get(&self.default_locale))
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the designated fallback locale
    pub const fn default_locale(&self) -> &LocaleTag {
        &self.default_locale
    }

    /// Iterates over the locales with a sequence, in tag order
    pub fn locales(&self) -> impl Iterator<Item = &LocaleTag> {
        self.sequences.keys()
    }
}
