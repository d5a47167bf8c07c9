use nexus_types::SectionId;

/// Errors raised while loading `site.toml`.
///
/// Loading is the only fallible step of the page; once a [`crate::Site`]
/// exists every tracker and effect operation is total.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("site config defines no sections")]
    NoSections,

    #[error("duplicate section id `{0}`")]
    DuplicateSection(SectionId),

    #[error("default section `{0}` is not one of the configured sections")]
    UnknownDefault(SectionId),
}
