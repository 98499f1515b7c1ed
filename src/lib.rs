/*!
Font name resolution and vertical metrics for text and subtitle rendering.

A [`FontResolver`] owns a fixed collection of fonts and maps a human readable
font name such as `"Noto Sans Bold"` to every font whose naming table carries
that name, along with the ascent, descent and decoration metrics needed to
lay out text with it. Results are cached per name.

Fonts are supplied either as [`FontRecord`]s built in memory or read from
font files and collections through [`ResolverBuilder::add_data`].

```
use fontres::{FontRecord, FontResolver, MetricsBundle, NameTable, NameType, Platform};

let names = NameTable::new()
    .with_english(Platform::Windows, NameType::FontFamily, "Noto Sans")
    .with_english(Platform::Windows, NameType::FontSubfamily, "Bold");
let resolver = FontResolver::new([FontRecord::new(names, MetricsBundle::default())]);
assert_eq!(resolver.resolve(" NOTO SANS bold ").len(), 1);
assert!(resolver.resolve("Noto Serif").is_empty());
```
*/

mod data;
mod error;
mod metrics;
mod name;
mod resolver;
mod scan;

pub use data::{FontData, FontRecord, FontTables};
pub use error::Error;
pub use metrics::{
    fix_unsigned_to_signed_short, HeadMetrics, MetricsBundle, Os2Metrics, PostMetrics,
};
pub use name::{
    first_present, normalize, LocalizedNames, NameTable, NameType, Platform, ENGLISH,
};
pub use resolver::{FontResolver, ResolvedFontInfo, ResolvedFonts, ResolverBuilder};
pub use scan::scan_data;
