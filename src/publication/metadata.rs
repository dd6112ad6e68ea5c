//! Rendition-level bibliographic metadata.
//!
//! [`Metadata`] holds every Dublin Core field a package document can carry,
//! pre-populated with sensible defaults so a publication is serializable the
//! moment it is created. Callers override fields through [`MetadataUpdate`],
//! a sparse patch merged field-by-field by [`Metadata::merge`].

pub mod datetime;

use datetime::DateTime;

/// A creator or contributor of the publication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    /// Display name (`dc:creator`/`dc:contributor` text content).
    pub name: String,
    /// Sort-friendly form, emitted as a `file-as` refinement.
    pub file_as: Option<String>,
    /// MARC relator code, emitted as a `role` refinement.
    pub role: Option<String>,
    /// XML id of the element, required for refinements to attach.
    pub uid: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_as: None,
            role: None,
            uid: None,
        }
    }

    pub fn file_as(mut self, value: impl Into<String>) -> Self {
        self.file_as = Some(value.into());
        self
    }

    pub fn role(mut self, value: impl Into<String>) -> Self {
        self.role = Some(value.into());
        self
    }

    pub fn uid(mut self, value: impl Into<String>) -> Self {
        self.uid = Some(value.into());
        self
    }

    fn merge(&mut self, update: AuthorUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(file_as) = update.file_as {
            self.file_as = Some(file_as);
        }
        if let Some(role) = update.role {
            self.role = Some(role);
        }
        if let Some(uid) = update.uid {
            self.uid = Some(uid);
        }
    }
}

/// Sparse patch for one [`Author`]; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorUpdate {
    pub name: Option<String>,
    pub file_as: Option<String>,
    pub role: Option<String>,
    pub uid: Option<String>,
}

impl From<&str> for AuthorUpdate {
    fn from(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Self::default()
        }
    }
}

/// Bibliographic fields of one rendition.
///
/// Every field has a default so that serialization never has to invent one:
/// the language is `en`, the creator is named `unknown` with uid `creator`
/// (so its `file-as` refinement always has a target), and both dates are the
/// construction instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub language: String,
    pub creator: Author,
    pub contributor: Vec<Author>,
    pub coverage: String,
    pub date: DateTime,
    pub description: String,
    pub format: String,
    pub publisher: String,
    pub relation: String,
    pub rights: String,
    pub source: String,
    pub subject: String,
    pub kind: String,
    pub last_modified: DateTime,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = DateTime::now();

        Self {
            title: String::new(),
            language: "en".to_owned(),
            creator: Author::new("unknown").uid("creator"),
            contributor: Vec::new(),
            coverage: String::new(),
            date: now,
            description: String::new(),
            format: String::new(),
            publisher: String::new(),
            relation: String::new(),
            rights: String::new(),
            source: String::new(),
            subject: String::new(),
            kind: String::new(),
            last_modified: now,
        }
    }
}

impl Metadata {
    /// Apply a sparse update: present fields replace or merge, absent fields
    /// keep their current values.
    ///
    /// The creator merges per-field; contributors and dates replace
    /// wholesale.
    pub fn merge(&mut self, update: MetadataUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(creator) = update.creator {
            self.creator.merge(creator);
        }
        if let Some(contributor) = update.contributor {
            self.contributor = contributor;
        }
        if let Some(coverage) = update.coverage {
            self.coverage = coverage;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(format) = update.format {
            self.format = format;
        }
        if let Some(publisher) = update.publisher {
            self.publisher = publisher;
        }
        if let Some(relation) = update.relation {
            self.relation = relation;
        }
        if let Some(rights) = update.rights {
            self.rights = rights;
        }
        if let Some(source) = update.source {
            self.source = source;
        }
        if let Some(subject) = update.subject {
            self.subject = subject;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(last_modified) = update.last_modified {
            self.last_modified = last_modified;
        }
    }
}

/// Sparse patch for [`Metadata`]; `None` fields are left untouched.
///
/// # Examples
/// ```
/// use bindery::publication::metadata::{Metadata, MetadataUpdate};
///
/// let mut metadata = Metadata::default();
/// metadata.merge(MetadataUpdate {
///     title: Some("Travels".to_owned()),
///     ..MetadataUpdate::default()
/// });
///
/// assert_eq!("Travels", metadata.title);
/// assert_eq!("en", metadata.language);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataUpdate {
    pub title: Option<String>,
    pub language: Option<String>,
    pub creator: Option<AuthorUpdate>,
    pub contributor: Option<Vec<Author>>,
    pub coverage: Option<String>,
    pub date: Option<DateTime>,
    pub description: Option<String>,
    pub format: Option<String>,
    pub publisher: Option<String>,
    pub relation: Option<String>,
    pub rights: Option<String>,
    pub source: Option<String>,
    pub subject: Option<String>,
    pub kind: Option<String>,
    pub last_modified: Option<DateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let metadata = Metadata::default();

        assert_eq!("", metadata.title);
        assert_eq!("en", metadata.language);
        assert_eq!("unknown", metadata.creator.name);
        assert_eq!(Some("creator"), metadata.creator.uid.as_deref());
        assert!(metadata.contributor.is_empty());
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut metadata = Metadata::default();
        metadata.merge(MetadataUpdate {
            title: Some("Travels".to_owned()),
            publisher: Some("Acme".to_owned()),
            ..MetadataUpdate::default()
        });

        assert_eq!("Travels", metadata.title);
        assert_eq!("Acme", metadata.publisher);
        assert_eq!("en", metadata.language);
        assert_eq!("unknown", metadata.creator.name);
    }

    #[test]
    fn test_merge_creator_per_field() {
        let mut metadata = Metadata::default();
        metadata.merge(MetadataUpdate {
            creator: Some(AuthorUpdate {
                file_as: Some("Swift, Jonathan".to_owned()),
                ..AuthorUpdate::default()
            }),
            ..MetadataUpdate::default()
        });

        // Name and uid survive a partial author update.
        assert_eq!("unknown", metadata.creator.name);
        assert_eq!(Some("creator"), metadata.creator.uid.as_deref());
        assert_eq!(Some("Swift, Jonathan"), metadata.creator.file_as.as_deref());

        metadata.merge(MetadataUpdate {
            creator: Some(AuthorUpdate::from("Jonathan Swift")),
            ..MetadataUpdate::default()
        });
        assert_eq!("Jonathan Swift", metadata.creator.name);
        assert_eq!(Some("Swift, Jonathan"), metadata.creator.file_as.as_deref());
    }

    #[test]
    fn test_merge_date_replaces_wholesale() {
        let mut metadata = Metadata::default();
        let date = DateTime::new(2023, 2, 26, 11, 0, 0);

        metadata.merge(MetadataUpdate {
            date: Some(date),
            ..MetadataUpdate::default()
        });

        assert_eq!(date, metadata.date);
        assert_ne!(date, metadata.last_modified);
    }
}
