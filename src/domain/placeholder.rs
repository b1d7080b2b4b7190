use std::fmt;

/// A placeholder token that may appear in a version file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    SoftwareVersion,
    ApiVersion,
    ReleaseRef,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [
        Placeholder::SoftwareVersion,
        Placeholder::ApiVersion,
        Placeholder::ReleaseRef,
    ];

    /// Symbolic name, without braces
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::SoftwareVersion => "SOFTWARE_VERSION",
            Placeholder::ApiVersion => "API_VERSION",
            Placeholder::ReleaseRef => "RELEASE_REF",
        }
    }

    /// Literal marker as it appears in the document
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::SoftwareVersion => "{SOFTWARE_VERSION}",
            Placeholder::ApiVersion => "{API_VERSION}",
            Placeholder::ReleaseRef => "{RELEASE_REF}",
        }
    }

    /// Looks up a placeholder by its symbolic name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_brace_delimited_names() {
        for placeholder in Placeholder::ALL {
            assert_eq!(placeholder.token(), format!("{{{}}}", placeholder.name()));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            Placeholder::from_name("API_VERSION"),
            Some(Placeholder::ApiVersion)
        );
        assert_eq!(Placeholder::from_name("api_version"), None);
        assert_eq!(Placeholder::from_name("{API_VERSION}"), None);
    }
}
