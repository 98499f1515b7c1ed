use super::data::{FontData, FontRecord, FontTables};
use super::error::Error;
use super::name::{normalize, NameTable, NameType};
use super::scan::scan_data;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared, ordered list of fonts matching a name.
pub type ResolvedFonts<F = FontRecord> = Arc<[ResolvedFontInfo<F>]>;

/// A font matching a requested name along with the metrics needed to lay out
/// text with it.
///
/// All metrics are in font units. A value of `None` means the table that
/// provides the metric is missing from the font.
pub struct ResolvedFontInfo<F = FontRecord> {
    pub font: Arc<F>,
    pub ascent: Option<i32>,
    pub descent: Option<i32>,
    pub strikethrough_size: Option<i16>,
    pub strikethrough_position: Option<i16>,
    pub underline_thickness: Option<i16>,
    pub underline_position: Option<i16>,
    pub weight: Option<u16>,
    pub selection: Option<u16>,
}

impl<F: FontTables> ResolvedFontInfo<F> {
    fn new(font: Arc<F>) -> Self {
        let metrics = *font.metrics();
        let os2 = metrics.os2;
        let post = metrics.post;
        Self {
            ascent: metrics.ascent(),
            descent: metrics.descent(),
            strikethrough_size: os2.map(|os2| os2.strikeout_size),
            strikethrough_position: os2.map(|os2| os2.strikeout_position),
            underline_thickness: post.map(|post| post.underline_thickness),
            underline_position: post.map(|post| post.underline_position),
            weight: os2.map(|os2| os2.weight_class),
            selection: os2.map(|os2| os2.selection),
            font,
        }
    }
}

impl<F> ResolvedFontInfo<F> {
    /// Returns the names of the metrics that are unavailable.
    pub fn missing_metrics(&self) -> Vec<&'static str> {
        let fields = [
            ("ascent", self.ascent.is_none()),
            ("descent", self.descent.is_none()),
            ("strikethrough_size", self.strikethrough_size.is_none()),
            ("strikethrough_position", self.strikethrough_position.is_none()),
            ("underline_thickness", self.underline_thickness.is_none()),
            ("underline_position", self.underline_position.is_none()),
            ("weight", self.weight.is_none()),
            ("selection", self.selection.is_none()),
        ];
        fields
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }

    /// Returns true if every metric is available.
    pub fn is_complete(&self) -> bool {
        self.missing_metrics().is_empty()
    }
}

impl<F> Clone for ResolvedFontInfo<F> {
    fn clone(&self) -> Self {
        Self {
            font: self.font.clone(),
            ascent: self.ascent,
            descent: self.descent,
            strikethrough_size: self.strikethrough_size,
            strikethrough_position: self.strikethrough_position,
            underline_thickness: self.underline_thickness,
            underline_position: self.underline_position,
            weight: self.weight,
            selection: self.selection,
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for ResolvedFontInfo<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFontInfo")
            .field("font", &self.font)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .field("strikethrough_size", &self.strikethrough_size)
            .field("strikethrough_position", &self.strikethrough_position)
            .field("underline_thickness", &self.underline_thickness)
            .field("underline_position", &self.underline_position)
            .field("weight", &self.weight)
            .field("selection", &self.selection)
            .finish()
    }
}

/// Resolves font names to the loaded fonts that carry them.
///
/// A name matches a font if it equals, ignoring case and surrounding
/// whitespace, any of:
/// - the family name
/// - the family and subfamily names joined by a single space
/// - the typographic family name
/// - the typographic family and subfamily names joined by a single space
/// - the full name
///
/// Each name is taken from the Windows platform if present, then Unicode,
/// then Macintosh.
///
/// Results are cached per normalized name for the lifetime of the resolver.
/// The font collection never changes after construction so cached entries
/// are never invalidated.
pub struct FontResolver<F = FontRecord> {
    fonts: Vec<Arc<F>>,
    full_name_matching: bool,
    cache: RwLock<HashMap<String, ResolvedFonts<F>>>,
    scans: AtomicUsize,
}

impl<F: FontTables> FontResolver<F> {
    /// Creates a resolver over the specified fonts with the default options.
    pub fn new(fonts: impl IntoIterator<Item = F>) -> Self {
        Self::from_shared(fonts.into_iter().map(Arc::new))
    }

    /// Creates a resolver over fonts that are shared with the caller.
    pub fn from_shared(fonts: impl IntoIterator<Item = Arc<F>>) -> Self {
        Self::with_options(fonts.into_iter().collect(), true)
    }

    fn with_options(fonts: Vec<Arc<F>>, full_name_matching: bool) -> Self {
        Self {
            fonts,
            full_name_matching,
            cache: RwLock::new(HashMap::new()),
            scans: AtomicUsize::new(0),
        }
    }

    /// Returns every font matching the name, in collection order.
    ///
    /// An empty list means no loaded font carries the name.
    pub fn resolve(&self, name: &str) -> ResolvedFonts<F> {
        let name = normalize(name);
        if let Some(fonts) = self.cache.read().get(&name) {
            log::trace!("font cache hit for {:?}", name);
            return fonts.clone();
        }
        // Upgradable guards exclude each other, so only one thread scans a
        // given name while plain readers keep hitting the cache.
        let cache = self.cache.upgradable_read();
        if let Some(fonts) = cache.get(&name) {
            return fonts.clone();
        }
        let fonts = self.scan(&name);
        let mut cache = RwLockUpgradableReadGuard::upgrade(cache);
        cache.insert(name, fonts.clone());
        fonts
    }

    fn scan(&self, name: &str) -> ResolvedFonts<F> {
        self.scans.fetch_add(1, Ordering::Relaxed);
        let results = self
            .fonts
            .iter()
            .filter(|font| self.matches(font.name_table(), name))
            .map(|font| ResolvedFontInfo::new(font.clone()))
            .inspect(|info| {
                if !info.is_complete() {
                    log::warn!(
                        "font matching {:?} is missing metrics: {}",
                        name,
                        info.missing_metrics().join(", ")
                    );
                }
            })
            .collect::<Vec<_>>();
        log::debug!(
            "resolved {:?} to {} of {} fonts",
            name,
            results.len(),
            self.fonts.len()
        );
        results.into()
    }

    fn matches(&self, names: &NameTable, query: &str) -> bool {
        let family_match = |family: NameType, subfamily: NameType| {
            let Some(family) = names.english(family).filter(|s| !s.is_empty()) else {
                return false;
            };
            if normalize(family) == query {
                return true;
            }
            match names.english(subfamily).filter(|s| !s.is_empty()) {
                Some(subfamily) => normalize(&format!("{} {}", family, subfamily)) == query,
                None => false,
            }
        };
        family_match(NameType::FontFamily, NameType::FontSubfamily)
            || family_match(NameType::PreferredFamily, NameType::PreferredSubfamily)
            || (self.full_name_matching
                && names
                    .english(NameType::FullName)
                    .filter(|s| !s.is_empty())
                    .map_or(false, |full_name| normalize(full_name) == query))
    }
}

impl<F> FontResolver<F> {
    /// Returns the fonts in collection order.
    pub fn fonts(&self) -> &[Arc<F>] {
        &self.fonts
    }

    /// Returns the number of fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Returns true if the resolver holds no fonts.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Returns the number of collection scans performed so far. Each cache
    /// miss performs exactly one scan.
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    /// Returns the number of names with cached results.
    pub fn cached_names(&self) -> usize {
        self.cache.read().len()
    }
}

/// Builder for configuring a font resolver.
pub struct ResolverBuilder<F = FontRecord> {
    fonts: Vec<Arc<F>>,
    full_name_matching: bool,
}

impl<F> Default for ResolverBuilder<F> {
    fn default() -> Self {
        Self {
            fonts: Vec::new(),
            full_name_matching: true,
        }
    }
}

impl<F: FontTables> ResolverBuilder<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a font to the collection.
    pub fn add_font(&mut self, font: F) -> &mut Self {
        self.add_shared_font(Arc::new(font))
    }

    /// Appends a font that is shared with the caller.
    pub fn add_shared_font(&mut self, font: Arc<F>) -> &mut Self {
        self.fonts.push(font);
        self
    }

    /// Appends fonts to the collection in iteration order.
    pub fn add_fonts(&mut self, fonts: impl IntoIterator<Item = F>) -> &mut Self {
        self.fonts.extend(fonts.into_iter().map(Arc::new));
        self
    }

    /// Sets whether the full name is matched against requested names.
    /// Enabled by default.
    pub fn full_name_matching(&mut self, enabled: bool) -> &mut Self {
        self.full_name_matching = enabled;
        self
    }

    pub fn build(self) -> FontResolver<F> {
        log::debug!("building font resolver with {} fonts", self.fonts.len());
        FontResolver::with_options(self.fonts, self.full_name_matching)
    }
}

impl ResolverBuilder<FontRecord> {
    /// Reads every face in a font file or collection and appends them to the
    /// collection. Returns the number of faces added.
    pub fn add_data(&mut self, data: impl Into<FontData>) -> Result<usize, Error> {
        let records = scan_data(&data.into())?;
        let count = records.len();
        self.add_fonts(records);
        Ok(count)
    }
}
