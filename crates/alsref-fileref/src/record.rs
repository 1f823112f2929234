//! The FileRef record.

use crate::classic;
use crate::location::{Location, ROOT};
use crate::FormatTag;

/// Structural layout of a record, chosen by the caller from the project
/// schema the record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// Fixed classic block with a format tag, no disk location.
    Format,
    /// Opaque header and a disk location after the footer token.
    DiskLocation,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Format => write!(f, "format"),
            Variant::DiskLocation => write!(f, "disk-location"),
        }
    }
}

/// Variant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefKind {
    /// File type code of the referenced asset.
    Format { format: FormatTag },
    /// `/`-delimited path of the volume the location is relative to.
    /// The root marker `/` means the asset is internal to the project volume.
    DiskLocation { disk_location: String },
}

impl RefKind {
    /// Variant this kind belongs to.
    pub fn variant(&self) -> Variant {
        match self {
            RefKind::Format { .. } => Variant::Format,
            RefKind::DiskLocation { .. } => Variant::DiskLocation,
        }
    }
}

/// A decoded file reference.
///
/// `header` and `footer` are hex spans the codec does not interpret. For the
/// format variant `header` is the fixed classic block, whose modelled names
/// are rewritten from the record fields on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    header: String,
    disk_name: String,
    location: Location,
    kind: RefKind,
    footer: String,
}

impl FileRef {
    /// Build a fresh format-variant record from the default classic block.
    ///
    /// ```
    /// use alsref_fileref::{FileRef, FormatTag};
    ///
    /// let fileref = FileRef::new("Macintosh HD", "Users/me/Desktop/take.aif", FormatTag::AIFF);
    /// assert_eq!(fileref.location(':'), "Users:me:Desktop:take.aif");
    /// assert_eq!(fileref.dir_name(), "Desktop");
    /// ```
    pub fn new(disk_name: impl Into<String>, location: &str, format: FormatTag) -> Self {
        Self {
            header: classic::default_block(),
            disk_name: disk_name.into(),
            location: Location::normalized(location),
            kind: RefKind::Format { format },
            footer: classic::DEFAULT_FOOTER.to_string(),
        }
    }

    /// Assemble a record from its parts.
    pub fn from_parts(
        header: impl Into<String>,
        disk_name: impl Into<String>,
        location: Location,
        kind: RefKind,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            header: header.into(),
            disk_name: disk_name.into(),
            location,
            kind,
            footer: footer.into(),
        }
    }

    /// Rebuild the record with `location` as its new path.
    /// See [`FileRef::set_location`].
    pub fn with_location(mut self, location: &str) -> Self {
        self.set_location(location);
        self
    }

    /// Replace the stored path in place.
    ///
    /// The path is normalized against the volume root and replaces the old
    /// one entirely. A disk-location record is always turned into an
    /// internal reference. Header and footer are left untouched.
    pub fn set_location(&mut self, location: &str) {
        self.location = Location::normalized(location);
        if let RefKind::DiskLocation { disk_location } = &mut self.kind {
            disk_location.clear();
            disk_location.push_str(ROOT);
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn disk_name(&self) -> &str {
        &self.disk_name
    }

    pub fn kind(&self) -> &RefKind {
        &self.kind
    }

    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    /// The stored path as segments.
    pub fn path(&self) -> &Location {
        &self.location
    }

    /// The stored path rendered with `delimiter`.
    pub fn location(&self, delimiter: char) -> String {
        self.location.render(delimiter)
    }

    /// Alias of [`FileRef::location`]: the path relative to the disk location.
    pub fn relative_location(&self, delimiter: char) -> String {
        self.location(delimiter)
    }

    /// Disk location rendered with `delimiter`; `None` for the format variant.
    pub fn disk_location(&self, delimiter: char) -> Option<String> {
        match &self.kind {
            RefKind::DiskLocation { disk_location } => {
                Some(disk_location.replace('/', &delimiter.to_string()))
            }
            RefKind::Format { .. } => None,
        }
    }

    /// Disk location joined with the stored path, rendered with `delimiter`.
    /// Format-variant records are rooted at the volume root.
    pub fn absolute_location(&self, delimiter: char) -> String {
        let base = match &self.kind {
            RefKind::DiskLocation { disk_location } => disk_location.as_str(),
            RefKind::Format { .. } => ROOT,
        };

        let mut joined = base.trim_end_matches('/').to_string();
        joined.push('/');
        joined.push_str(&self.location.render('/'));
        joined.replace('/', &delimiter.to_string())
    }

    /// Whether the asset lives on another volume than the project.
    pub fn is_external(&self) -> bool {
        matches!(&self.kind, RefKind::DiskLocation { disk_location } if disk_location != ROOT)
    }

    pub fn format(&self) -> Option<FormatTag> {
        match self.kind {
            RefKind::Format { format } => Some(format),
            RefKind::DiskLocation { .. } => None,
        }
    }

    pub fn file_name(&self) -> &str {
        self.location.file_name()
    }

    pub fn dir_name(&self) -> &str {
        self.location.dir_name()
    }
}
