use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// One selectable department from the search form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OptionEntry {
    /// Code posted in the department field.
    pub value: String,
    /// Visible option text, used to name the output file.
    pub label: String,
}

impl OptionEntry {
    pub fn new(value: impl Into<String>, label: impl AsRef<str>) -> Self {
        Self {
            value: value.into(),
            label: label.as_ref().trim().to_string(),
        }
    }
}

impl fmt::Display for OptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.value)
    }
}

/// Ordered form fields, with the same replace semantics as a browser's
/// `FormData`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormPayload(Vec<(String, String)>);

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, keeping any existing entries with the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Replaces the first entry named `name` in place and drops any later
    /// duplicates. Appends when the name is absent.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(n, _)| n == name) {
            Some(first) => {
                self.0[first].1 = value;
                let mut index = 0;
                self.0.retain(|(n, _)| {
                    let keep = index <= first || n != name;
                    index += 1;
                    keep
                });
            }
            None => self.0.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}

/// A response body and the file it should be written to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DownloadResult {
    pub filename: String,
    pub body: String,
}

impl DownloadResult {
    pub fn new(prefix: &str, label: &str, body: String) -> Self {
        Self {
            filename: output_filename(prefix, label),
            body,
        }
    }
}

/// Collapses every whitespace run in `label` to one underscore. Path
/// separators are mapped to underscores as well.
pub fn sanitize_label(label: &str) -> String {
    WHITESPACE
        .replace_all(label, "_")
        .replace(['/', '\\'], "_")
}

pub fn output_filename(prefix: &str, label: &str) -> String {
    format!("{}{}.html", prefix, sanitize_label(label))
}
