//! Integration tests for name matching and metric derivation.

use fontres::{
    FontRecord, FontResolver, HeadMetrics, MetricsBundle, NameTable, NameType, Os2Metrics,
    Platform, PostMetrics, ResolverBuilder,
};
use std::sync::Arc;

fn names(family: &str, subfamily: &str) -> NameTable {
    NameTable::new()
        .with_english(Platform::Windows, NameType::FontFamily, family)
        .with_english(Platform::Windows, NameType::FontSubfamily, subfamily)
}

fn full_metrics() -> MetricsBundle {
    MetricsBundle {
        os2: Some(Os2Metrics {
            win_ascent: 1000,
            win_descent: 300,
            typo_ascent: 800,
            typo_descent: -200,
            strikeout_size: 50,
            strikeout_position: 250,
            weight_class: 400,
            selection: 0x40,
        }),
        head: Some(HeadMetrics {
            y_max: 1100,
            y_min: -350,
        }),
        post: Some(PostMetrics {
            underline_thickness: 50,
            underline_position: -100,
        }),
    }
}

fn record(family: &str, subfamily: &str) -> FontRecord {
    FontRecord::new(names(family, subfamily), full_metrics())
}

fn with_os2(os2: Os2Metrics, head: Option<HeadMetrics>) -> FontRecord {
    FontRecord::new(
        names("Foo", "Regular"),
        MetricsBundle {
            os2: Some(os2),
            head,
            post: None,
        },
    )
}

#[test]
fn repeated_queries_hit_the_cache() {
    let resolver = FontResolver::new([record("Arial", "Regular")]);
    let first = resolver.resolve("Arial");
    let second = resolver.resolve("arial");
    assert_eq!(first.len(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(resolver.scan_count(), 1);
    assert_eq!(resolver.cached_names(), 1);
}

#[test]
fn case_and_whitespace_are_ignored() {
    let resolver = FontResolver::new([record("Arial", "Regular")]);
    let expected = resolver.resolve("arial");
    for query in [" Arial ", "ARIAL", "arial", "\tArIaL\n"] {
        assert!(Arc::ptr_eq(&resolver.resolve(query), &expected), "{:?}", query);
    }
    assert_eq!(resolver.scan_count(), 1);
}

#[test]
fn byte_order_marks_are_ignored() {
    let resolver = FontResolver::new([record("\u{feff}Arial", "Regular")]);
    assert_eq!(resolver.resolve("arial").len(), 1);
    assert_eq!(resolver.resolve("\u{feff}ARIAL ").len(), 1);
    assert_eq!(resolver.scan_count(), 1);
}

#[test]
fn windows_names_take_priority() {
    let names = NameTable::new()
        .with_english(Platform::Windows, NameType::FontFamily, "Foo")
        .with_english(Platform::Unicode, NameType::FontFamily, "Bar");
    let resolver = FontResolver::new([FontRecord::new(names, full_metrics())]);
    assert_eq!(resolver.resolve("foo").len(), 1);
    assert!(resolver.resolve("bar").is_empty());
}

#[test]
fn unicode_names_are_used_before_macintosh() {
    let names = NameTable::new()
        .with_english(Platform::Macintosh, NameType::FontFamily, "Mac")
        .with_english(Platform::Unicode, NameType::FontFamily, "Uni");
    let resolver = FontResolver::new([FontRecord::new(names, full_metrics())]);
    assert_eq!(resolver.resolve("uni").len(), 1);
    assert!(resolver.resolve("mac").is_empty());
}

#[test]
fn macintosh_names_are_the_last_resort() {
    let names = NameTable::new().with_english(Platform::Macintosh, NameType::FontFamily, "Mac");
    let resolver = FontResolver::new([FontRecord::new(names, full_metrics())]);
    assert_eq!(resolver.resolve("mac").len(), 1);
}

#[test]
fn subfamily_is_joined_with_one_space() {
    let resolver = FontResolver::new([FontRecord::new(
        NameTable::new()
            .with_english(Platform::Windows, NameType::FontFamily, "Foo Sans")
            .with_english(Platform::Windows, NameType::FontSubfamily, "Bold"),
        full_metrics(),
    )]);
    assert_eq!(resolver.resolve("foo sans bold").len(), 1);
    assert!(resolver.resolve("foo sansbold").is_empty());
    assert!(resolver.resolve("foo sans  bold").is_empty());
    assert_eq!(resolver.resolve("foo sans").len(), 1);
    assert!(resolver.resolve("foo").is_empty());
}

#[test]
fn preferred_names_match_independently() {
    let names = NameTable::new()
        .with_english(Platform::Windows, NameType::FontFamily, "Foo Semibold")
        .with_english(Platform::Windows, NameType::FontSubfamily, "Regular")
        .with_english(Platform::Windows, NameType::PreferredFamily, "Foo")
        .with_english(Platform::Windows, NameType::PreferredSubfamily, "Semibold");
    let resolver = FontResolver::new([FontRecord::new(names, full_metrics())]);
    assert_eq!(resolver.resolve("foo semibold").len(), 1);
    assert_eq!(resolver.resolve("foo semibold regular").len(), 1);
    assert_eq!(resolver.resolve("foo").len(), 1);
    assert!(resolver.resolve("foo regular").is_empty());
}

#[test]
fn full_name_matches_by_default() {
    let names = NameTable::new()
        .with_english(Platform::Windows, NameType::FontFamily, "Foo")
        .with_english(Platform::Windows, NameType::FullName, "Foo Condensed Black");
    let resolver = FontResolver::new([FontRecord::new(names.clone(), full_metrics())]);
    assert_eq!(resolver.resolve("Foo Condensed Black").len(), 1);

    let mut builder = ResolverBuilder::<FontRecord>::new();
    builder
        .add_font(FontRecord::new(names, full_metrics()))
        .full_name_matching(false);
    let resolver = builder.build();
    assert!(resolver.resolve("Foo Condensed Black").is_empty());
    assert_eq!(resolver.resolve("Foo").len(), 1);
}

#[test]
fn all_matches_are_returned_in_order() {
    let fonts = [
        record("Foo", "Regular"),
        record("Bar", "Regular"),
        record("Foo", "Bold"),
    ];
    let resolver = FontResolver::new(fonts);
    let results = resolver.resolve("foo");
    assert_eq!(results.len(), 2);
    assert!(Arc::ptr_eq(&results[0].font, &resolver.fonts()[0]));
    assert!(Arc::ptr_eq(&results[1].font, &resolver.fonts()[2]));
    let bold = resolver.resolve("foo bold");
    assert_eq!(bold.len(), 1);
    assert!(Arc::ptr_eq(&bold[0].font, &resolver.fonts()[2]));
}

#[test]
fn shared_fonts_keep_identity() {
    let font = Arc::new(record("Foo", "Regular"));
    let resolver = FontResolver::from_shared([font.clone()]);
    assert!(Arc::ptr_eq(&resolver.resolve("foo")[0].font, &font));
}

#[test]
fn missing_names_are_cached() {
    let resolver = FontResolver::new([record("Foo", "Regular")]);
    let first = resolver.resolve("NonexistentFontXYZ");
    assert!(first.is_empty());
    let second = resolver.resolve("nonexistentfontxyz");
    assert!(second.is_empty());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(resolver.scan_count(), 1);
}

#[test]
fn empty_query_is_an_ordinary_name() {
    let resolver = FontResolver::new([record("Foo", "Regular")]);
    assert!(resolver.resolve("   ").is_empty());
    assert!(resolver.resolve("").is_empty());
    assert_eq!(resolver.scan_count(), 1);
}

#[test]
fn metrics_of_a_complete_font() {
    let resolver = FontResolver::new([record("Foo", "Regular")]);
    let info = &resolver.resolve("foo")[0];
    assert_eq!(info.ascent, Some(1000));
    assert_eq!(info.descent, Some(300));
    assert_eq!(info.strikethrough_size, Some(50));
    assert_eq!(info.strikethrough_position, Some(250));
    assert_eq!(info.underline_thickness, Some(50));
    assert_eq!(info.underline_position, Some(-100));
    assert_eq!(info.weight, Some(400));
    assert_eq!(info.selection, Some(0x40));
    assert!(info.is_complete());
}

#[test]
fn win_ascent_is_sign_corrected() {
    let os2 = Os2Metrics {
        win_ascent: 0x8000,
        win_descent: 0xFFCE,
        ..Default::default()
    };
    let resolver = FontResolver::new([with_os2(os2, None)]);
    let info = &resolver.resolve("foo")[0];
    assert_eq!(info.ascent, Some(-32768));
    assert_eq!(info.descent, Some(-50));
}

#[test]
fn zero_win_metrics_fall_through() {
    let head = Some(HeadMetrics {
        y_max: 950,
        y_min: -250,
    });
    let typo = Os2Metrics {
        typo_ascent: 780,
        typo_descent: -220,
        ..Default::default()
    };
    let resolver = FontResolver::new([with_os2(typo, head), with_os2(Os2Metrics::default(), head)]);
    let results = resolver.resolve("foo");
    assert_eq!(results[0].ascent, Some(780));
    assert_eq!(results[0].descent, Some(220));
    assert_eq!(results[1].ascent, Some(950));
    assert_eq!(results[1].descent, Some(250));
}

#[test]
fn missing_tables_degrade_the_record() {
    let without_os2 = FontRecord::new(
        names("Foo", "Regular"),
        MetricsBundle {
            os2: None,
            head: Some(HeadMetrics {
                y_max: 900,
                y_min: -200,
            }),
            post: None,
        },
    );
    let bare = FontRecord::new(names("Foo", "Italic"), MetricsBundle::default());
    let resolver = FontResolver::new([without_os2, bare]);
    let results = resolver.resolve("foo");
    assert_eq!(results.len(), 2);

    assert_eq!(results[0].ascent, Some(900));
    assert_eq!(results[0].descent, Some(200));
    assert_eq!(results[0].weight, None);
    assert!(!results[0].is_complete());

    assert_eq!(results[1].ascent, None);
    assert_eq!(results[1].descent, None);
    assert_eq!(results[1].missing_metrics().len(), 8);
}
