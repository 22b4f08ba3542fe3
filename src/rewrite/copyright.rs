use regex::bytes::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static COPYRIGHT_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Copyright \(C\) [0-9]{4,}").expect("copyright pattern is valid")
});

/// Rewrites every `Copyright (C) <year>` notice to carry `year`.
///
/// ### Parameters
/// - `content`: The file content
/// - `year`: The year to stamp
///
pub fn normalize_copyright_year(content: &[u8], year: i32) -> Cow<'_, [u8]> {
    let replacement = format!("Copyright (C) {}", year);
    COPYRIGHT_YEAR.replace_all(content, replacement.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(input: &str, year: i32) -> String {
        String::from_utf8(normalize_copyright_year(input.as_bytes(), year).into_owned()).unwrap()
    }

    #[test]
    fn test_rewrites_every_notice() {
        let input = "// Copyright (C) 2019 The Android Open Source Project\n\
                     # Copyright (C) 2020 The Android Open Source Project\n";
        let output = apply(input, 2024);
        assert_eq!(
            output,
            "// Copyright (C) 2024 The Android Open Source Project\n\
             # Copyright (C) 2024 The Android Open Source Project\n"
        );
    }

    #[test]
    fn test_requires_four_digits() {
        assert_eq!(apply("Copyright (C) 199", 2024), "Copyright (C) 199");
        assert_eq!(apply("Copyright (C) 12345", 2024), "Copyright (C) 2024");
    }

    #[test]
    fn test_requires_exact_prefix() {
        let input = "Copyright (c) 2019\nCopyright 2019\nCopyright (C)2019\n";
        assert_eq!(apply(input, 2024), input);
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let once = apply("Copyright (C) 2011-2019 Foo\nCopyright (C) 2018\n", 2024);
        let twice = apply(&once, 2024);
        assert_eq!(once, twice);
        assert_eq!(once, "Copyright (C) 2024-2019 Foo\nCopyright (C) 2024\n");
    }

    #[test]
    fn test_unchanged_content_is_borrowed() {
        let out = normalize_copyright_year(b"no notice here", 2024);
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
