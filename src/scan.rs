//! Reads font records from font files and collections.

use super::data::{FontData, FontRecord};
use super::error::Error;
use super::metrics::{HeadMetrics, MetricsBundle, Os2Metrics, PostMetrics};
use super::name::{NameTable, NameType, Platform};
use read_fonts::{FileRef, FontRef, TableProvider};

/// Reads every face in a font file or collection.
///
/// Faces of a collection that fail to load are skipped. Only data that is
/// neither a font nor a collection produces an error.
pub fn scan_data(data: &FontData) -> Result<Vec<FontRecord>, Error> {
    let mut records = Vec::new();
    match FileRef::new(data.as_bytes())? {
        FileRef::Font(font) => {
            records.push(FontRecord::from_font_ref(&font).with_source(data.clone(), 0));
        }
        FileRef::Collection(collection) => {
            for index in 0..collection.len() {
                match collection.get(index) {
                    Ok(font) => records
                        .push(FontRecord::from_font_ref(&font).with_source(data.clone(), index)),
                    Err(e) => log::warn!("skipping face {} of collection: {}", index, e),
                }
            }
        }
    }
    log::debug!("scanned {} faces from {} bytes", records.len(), data.len());
    Ok(records)
}

impl FontRecord {
    /// Creates a record from the tables of a parsed font.
    ///
    /// Missing or malformed tables are recorded as absent.
    pub fn from_font_ref(font: &FontRef) -> Self {
        Self::new(read_names(font), read_metrics(font))
    }
}

fn read_names<'a>(font: &impl TableProvider<'a>) -> NameTable {
    let mut names = NameTable::new();
    let Ok(name) = font.name() else {
        return names;
    };
    let string_data = name.string_data();
    for record in name.name_record() {
        let Some(platform) = Platform::from_id(record.platform_id()) else {
            continue;
        };
        let Some(name_type) = NameType::from_id(record.name_id().to_u16()) else {
            continue;
        };
        let Ok(string) = record.string(string_data) else {
            continue;
        };
        let language = language_tag(platform, record.language_id());
        // Fonts often carry the same string in several encodings for one
        // platform. Keep the first.
        if names.get(platform, name_type, language).is_none() {
            names.insert(platform, name_type, language, string.chars().collect::<String>());
        }
    }
    names
}

fn read_metrics<'a>(font: &impl TableProvider<'a>) -> MetricsBundle {
    MetricsBundle {
        os2: font.os2().ok().map(|os2| Os2Metrics {
            win_ascent: os2.us_win_ascent(),
            win_descent: os2.us_win_descent(),
            typo_ascent: os2.s_typo_ascender(),
            typo_descent: os2.s_typo_descender(),
            strikeout_size: os2.y_strikeout_size(),
            strikeout_position: os2.y_strikeout_position(),
            weight_class: os2.us_weight_class(),
            selection: os2.fs_selection().bits(),
        }),
        head: font.head().ok().map(|head| HeadMetrics {
            y_max: head.y_max(),
            y_min: head.y_min(),
        }),
        post: font.post().ok().map(|post| PostMetrics {
            underline_thickness: post.underline_thickness().to_i16(),
            underline_position: post.underline_position().to_i16(),
        }),
    }
}

/// Returns the language tag for a platform specific language identifier.
///
/// Unicode platform strings carry no language scheme so the default id is
/// taken as English.
fn language_tag(platform: Platform, language_id: u16) -> &'static str {
    let key = (platform as u32) << 16 | language_id as u32;
    match LANGUAGE_MAP.binary_search_by(|x| x.0.cmp(&key)) {
        Ok(idx) => LANGUAGE_MAP[idx].1,
        _ => "und",
    }
}

#[rustfmt::skip]
const LANGUAGE_MAP: [(u32, &str); 44] = [
    (0x00000, "en"),
    (0x10000, "en"), (0x10001, "fr"), (0x10002, "de"), (0x10003, "it"), (0x10004, "nl"),
    (0x10005, "sv"), (0x10006, "es"), (0x10007, "da"), (0x10008, "pt"), (0x1000B, "ja"),
    (0x10013, "zh-tw"), (0x10017, "ko"), (0x10020, "ru"), (0x10021, "zh-cn"),
    (0x30404, "zh-tw"), (0x30405, "cs"), (0x30406, "da"), (0x30407, "de"), (0x30408, "el"),
    (0x30409, "en"), (0x3040A, "es"), (0x3040B, "fi"), (0x3040C, "fr"), (0x3040D, "he"),
    (0x3040E, "hu"), (0x30410, "it"), (0x30411, "ja"), (0x30412, "ko"), (0x30413, "nl"),
    (0x30414, "no"), (0x30415, "pl"), (0x30416, "pt"), (0x30419, "ru"), (0x3041D, "sv"),
    (0x3041E, "th"), (0x3041F, "tr"), (0x30422, "uk"), (0x3042A, "vi"), (0x30804, "zh-cn"),
    (0x30809, "en-gb"), (0x30C04, "zh-hk"), (0x30C09, "en-au"), (0x31009, "en-ca"),
];
