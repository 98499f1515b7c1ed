use super::metrics::MetricsBundle;
use super::name::NameTable;
use std::sync::Arc;

/// Shared reference to the bytes of a font file or collection.
#[derive(Clone)]
#[repr(transparent)]
pub struct FontData {
    inner: Arc<Vec<u8>>,
}

impl FontData {
    /// Creates font data from the specified bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Arc::new(data),
        }
    }

    /// Returns the underlying bytes of the data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData").field("len", &self.inner.len()).finish()
    }
}

impl std::ops::Deref for FontData {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for FontData {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for FontData {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Interface for font records that can be matched by name.
///
/// Implement this for a custom font type to resolve it with a
/// [`FontResolver`](super::FontResolver) directly.
pub trait FontTables {
    /// Returns the naming table of the font.
    fn name_table(&self) -> &NameTable;

    /// Returns the metrics tables of the font.
    fn metrics(&self) -> &MetricsBundle;
}

/// A single loaded font face.
#[derive(Clone, Default, Debug)]
pub struct FontRecord {
    pub(crate) names: NameTable,
    pub(crate) metrics: MetricsBundle,
    pub(crate) source: Option<FontData>,
    pub(crate) index: u32,
}

impl FontRecord {
    /// Creates a record from tables that were read elsewhere.
    pub fn new(names: NameTable, metrics: MetricsBundle) -> Self {
        Self {
            names,
            metrics,
            source: None,
            index: 0,
        }
    }

    /// Attaches the source data and the index of the face within it.
    pub fn with_source(mut self, source: FontData, index: u32) -> Self {
        self.source = Some(source);
        self.index = index;
        self
    }

    /// Returns the data the record was read from, if any.
    pub fn source(&self) -> Option<&FontData> {
        self.source.as_ref()
    }

    /// Returns the index of the face within its source.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl FontTables for FontRecord {
    fn name_table(&self) -> &NameTable {
        &self.names
    }

    fn metrics(&self) -> &MetricsBundle {
        &self.metrics
    }
}
