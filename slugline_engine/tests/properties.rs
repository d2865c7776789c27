use proptest::prelude::*;
use slugline_data::scripts::is_script_char;
use slugline_engine::{SlugOptions, slugify};

fn mixed_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,40}",
        "[A-Za-z0-9 _.&$-]{0,40}",
        "[a-zA-Zàéîõüßđ日本語한글カナ -]{0,40}",
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["-", "_", ".", "~", "+", "__", "::", "-_"]).prop_map(str::to_string)
}

fn options() -> impl Strategy<Value = SlugOptions> {
    (separator(), any::<bool>(), any::<bool>()).prop_map(|(sep, lowercase, decamelize)| {
        SlugOptions::default()
            .with_separator(sep)
            .with_lowercase(lowercase)
            .with_decamelize(decamelize)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn slugify_is_idempotent(input in mixed_text(), opts in options()) {
        let once = slugify(&input, &opts);
        prop_assert_eq!(slugify(&once, &opts), once);
    }

    #[test]
    fn separator_never_leads_trails_or_doubles(input in mixed_text(), sep in separator(), keep_case in any::<bool>()) {
        let opts = SlugOptions::default().with_separator(sep.clone()).with_lowercase(!keep_case);
        let slug = slugify(&input, &opts);
        let doubled = format!("{sep}{sep}");
        prop_assert!(!slug.starts_with(sep.as_str()), "{:?} -> {:?}", input, slug);
        prop_assert!(!slug.ends_with(sep.as_str()), "{:?} -> {:?}", input, slug);
        prop_assert!(!slug.contains(doubled.as_str()), "{:?} -> {:?}", input, slug);
    }

    #[test]
    fn output_uses_only_allowed_characters(input in mixed_text(), keep_case in any::<bool>()) {
        let opts = SlugOptions::default().with_lowercase(!keep_case);
        let slug = slugify(&input, &opts);
        for c in slug.chars() {
            let allowed = c == '-'
                || c.is_ascii_digit()
                || c.is_ascii_lowercase()
                || (keep_case && c.is_ascii_uppercase())
                || is_script_char(c);
            prop_assert!(allowed, "{:?} in {:?} (from {:?})", c, slug, input);
        }
    }
}
