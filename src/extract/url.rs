use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME_AND_WWW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:https?://)?(?:www\.)?").expect("valid regex"));

static URL_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<host>[^/?#]*)(?P<path>[^?#]*)(?:\?(?P<query>[^#]*))?(?:#(?P<fragment>.*))?$")
        .expect("valid regex")
});

/// True when `url` contains `marker`, ignoring case.
pub fn has_marker(url: &str, marker: &str) -> bool {
    url.to_lowercase().contains(&marker.to_lowercase())
}

/// Removes a leading scheme and `www.` prefix.
pub fn clean_url(url: &str) -> &str {
    let url = url.trim();
    match SCHEME_AND_WWW.find(url) {
        Some(m) => &url[m.end()..],
        None => url,
    }
}

/// Normalizes `url` so its path carries `support_path` (e.g. `/login/support/`).
///
/// The scheme and `www.` are dropped and the host is lowercased. The path is
/// compared segment by segment: when it already ends with the suffix segments
/// only the trailing slash is ensured, when it holds them elsewhere it is kept
/// as is, otherwise the suffix is appended. Empty segments are collapsed, so
/// no double slashes appear. Query and fragment follow the path. Applying the
/// function to its own output returns the same URL.
pub fn normalize_support_url(url: &str, support_path: &str) -> String {
    let clean = clean_url(url);
    if clean.is_empty() {
        return String::new();
    }
    let suffix: Vec<&str> = segments(support_path);
    let Some(parts) = URL_PARTS.captures(clean) else {
        return clean.to_string();
    };
    if suffix.is_empty() {
        return clean.to_string();
    }

    let host = parts.name("host").map_or("", |m| m.as_str()).to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    let raw_path = parts.name("path").map_or("", |m| m.as_str());
    let path = segments(raw_path);
    let new_path = if path.ends_with(&suffix) {
        format!("/{}/", path.join("/"))
    } else if path.windows(suffix.len()).any(|window| window == suffix.as_slice()) {
        raw_path.to_string()
    } else if path.is_empty() {
        format!("/{}/", suffix.join("/"))
    } else {
        format!("/{}/{}/", path.join("/"), suffix.join("/"))
    };

    let mut result = format!("{host}{new_path}");
    if let Some(query) = parts.name("query").filter(|m| !m.as_str().is_empty()) {
        result.push('?');
        result.push_str(query.as_str());
    }
    if let Some(fragment) = parts.name("fragment").filter(|m| !m.as_str().is_empty()) {
        result.push('#');
        result.push_str(fragment.as_str());
    }
    result
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "/login/support/";

    #[test]
    fn appends_suffix_to_bare_host() {
        assert_eq!(
            normalize_support_url("pob.socialweb.ch/", SUFFIX),
            "pob.socialweb.ch/login/support/"
        );
        assert_eq!(
            normalize_support_url("pob.socialweb.ch", SUFFIX),
            "pob.socialweb.ch/login/support/"
        );
    }

    #[test]
    fn appends_suffix_after_existing_path() {
        assert_eq!(
            normalize_support_url("socialweb.ch/x", SUFFIX),
            "socialweb.ch/x/login/support/"
        );
        assert_eq!(
            normalize_support_url("socialweb.ch/x/", SUFFIX),
            "socialweb.ch/x/login/support/"
        );
    }

    #[test]
    fn strips_scheme_and_www() {
        assert_eq!(
            normalize_support_url("https://www.heim.socialweb.ch/app", SUFFIX),
            "heim.socialweb.ch/app/login/support/"
        );
        assert_eq!(
            normalize_support_url("HTTP://heim.socialweb.ch", SUFFIX),
            "heim.socialweb.ch/login/support/"
        );
    }

    #[test]
    fn keeps_query_and_fragment_after_suffix() {
        assert_eq!(
            normalize_support_url("a.socialweb.ch/app?tenant=7#top", SUFFIX),
            "a.socialweb.ch/app/login/support/?tenant=7#top"
        );
    }

    #[test]
    fn existing_suffix_is_left_alone() {
        assert_eq!(
            normalize_support_url("socialweb.ch/x/login/support/", SUFFIX),
            "socialweb.ch/x/login/support/"
        );
        assert_eq!(
            normalize_support_url("socialweb.ch/x/login/support", SUFFIX),
            "socialweb.ch/x/login/support/"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            "socialweb.ch/x",
            "https://www.a.socialweb.ch/",
            "a.socialweb.ch/app?tenant=7",
            "b.socialweb.ch/login/support",
            "c.socialweb.ch//deep//path//",
            "x.socialweb.ch/login/support?tenant=7",
            "x.socialweb.ch/login/support#top",
            "x.socialweb.ch/app/login/supportdesk",
            "x.socialweb.ch/app/login/support/?tenant=7#top",
        ];
        for input in inputs {
            let once = normalize_support_url(input, SUFFIX);
            let twice = normalize_support_url(&once, SUFFIX);
            assert_eq!(once, twice, "input {input}");
            assert!(once.contains(SUFFIX), "input {input} -> {once}");
            assert_eq!(once.matches(SUFFIX).count(), 1, "input {input}");
        }
    }

    #[test]
    fn suffix_followed_by_query_or_fragment_gets_its_slash() {
        assert_eq!(
            normalize_support_url("x.socialweb.ch/login/support?tenant=7", SUFFIX),
            "x.socialweb.ch/login/support/?tenant=7"
        );
        assert_eq!(
            normalize_support_url("x.socialweb.ch/login/support#top", SUFFIX),
            "x.socialweb.ch/login/support/#top"
        );
    }

    #[test]
    fn suffix_must_match_whole_segments() {
        assert_eq!(
            normalize_support_url("x.socialweb.ch/app/login/supportdesk", SUFFIX),
            "x.socialweb.ch/app/login/supportdesk/login/support/"
        );
    }

    #[test]
    fn host_is_lowercased_path_is_not() {
        assert_eq!(
            normalize_support_url("Heim.SocialWeb.CH/App", SUFFIX),
            "heim.socialweb.ch/App/login/support/"
        );
        assert_eq!(
            normalize_support_url("WWW.Heim.socialweb.ch", SUFFIX),
            "heim.socialweb.ch/login/support/"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_support_url("   ", SUFFIX), "");
    }

    #[test]
    fn marker_check_ignores_case() {
        assert!(has_marker("Heim.SocialWeb.CH/app", "socialweb.ch"));
        assert!(!has_marker("nope.com", "socialweb.ch"));
    }
}
