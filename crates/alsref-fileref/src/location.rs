//! Volume-relative paths.

/// Root marker of a volume.
pub const ROOT: &str = "/";

/// A path inside a volume, held as its segments so it can be rendered with
/// either the POSIX (`/`) or the classic Mac OS (`:`) delimiter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    /// Split a stored path on `delimiter`, keeping every segment as-is.
    pub fn parse(path: &str, delimiter: char) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self {
            segments: path.split(delimiter).map(str::to_string).collect(),
        }
    }

    /// Normalize a `/`-delimited path lexically against the volume root.
    ///
    /// Empty and `.` segments are dropped and `..` removes the previous
    /// segment, never climbing above the root. The result has no leading
    /// separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use alsref_fileref::Location;
    ///
    /// let location = Location::normalized("/Users/me/./Music/../Desktop//take.aif");
    /// assert_eq!(location.render('/'), "Users/me/Desktop/take.aif");
    /// assert_eq!(location.render(':'), "Users:me:Desktop:take.aif");
    /// ```
    pub fn normalized(path: &str) -> Self {
        let mut segments: Vec<String> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other.to_string()),
            }
        }
        Self { segments }
    }

    /// Render the path with `delimiter` between segments.
    pub fn render(&self, delimiter: char) -> String {
        let mut buf = [0u8; 4];
        let separator: &str = delimiter.encode_utf8(&mut buf);
        self.segments.join(separator)
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, or an empty string for an empty path.
    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Name of the directory holding the file, or an empty string when the
    /// file sits at the volume root.
    pub fn dir_name(&self) -> &str {
        match self.segments.len() {
            0 | 1 => "",
            n => &self.segments[n - 2],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render('/'))
    }
}
