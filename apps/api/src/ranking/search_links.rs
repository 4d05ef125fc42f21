//! Search link builder — portal search URLs for a (role, location) pair.
//!
//! Pure string templating: no network access, no reachability checks, and the
//! same inputs always produce byte-identical URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters escaped by JavaScript's `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Portal keys every `SearchLinkSet` carries, in serialization order.
#[cfg(test)]
pub const PORTALS: [&str; 7] = [
    "naukri",
    "linkedin",
    "indeed",
    "glassdoor",
    "monster",
    "adzuna",
    "google",
];

/// One search URL per supported job portal. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLinkSet {
    pub naukri: String,
    pub linkedin: String,
    pub indeed: String,
    pub glassdoor: String,
    pub monster: String,
    pub adzuna: String,
    pub google: String,
}

#[cfg(test)]
impl SearchLinkSet {
    /// `(portal key, url)` pairs in `PORTALS` order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        PORTALS.into_iter().zip([
            self.naukri.as_str(),
            self.linkedin.as_str(),
            self.indeed.as_str(),
            self.glassdoor.as_str(),
            self.monster.as_str(),
            self.adzuna.as_str(),
            self.google.as_str(),
        ])
    }
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Builds the full link set for `role` searched in `location`.
pub fn build_search_links(role: &str, location: &str) -> SearchLinkSet {
    let q = encode(role);
    let loc = encode(location);

    SearchLinkSet {
        naukri: format!("https://www.naukri.com/{q}-jobs-in-{loc}"),
        linkedin: format!("https://www.linkedin.com/jobs/search?keywords={q}&location={loc}"),
        indeed: format!("https://in.indeed.com/jobs?q={q}&l={loc}"),
        glassdoor: format!(
            "https://www.glassdoor.co.in/Job/jobs.htm?sc.keyword={q}&locKeyword={loc}"
        ),
        monster: format!("https://www.monsterindia.com/srp/results?query={q}&locations={loc}"),
        adzuna: format!("https://www.adzuna.co.in/search?q={q}&where={loc}"),
        google: format!(
            "https://www.google.com/search?q={}",
            encode(&format!("{role} jobs in {location}"))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn query_param<'a>(url: &'a str, key: &str) -> &'a str {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{key}=")))
            .unwrap_or_else(|| panic!("{key} missing from {url}"))
    }

    fn decode(s: &str) -> String {
        percent_decode_str(s).decode_utf8().unwrap().into_owned()
    }

    #[test]
    fn test_linkedin_url_shape() {
        let links = build_search_links("QA Manager", "Bangalore");
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/jobs/search?keywords=QA%20Manager&location=Bangalore"
        );
    }

    #[test]
    fn test_naukri_uses_path_template() {
        let links = build_search_links("SDET", "Pune");
        assert_eq!(links.naukri, "https://www.naukri.com/SDET-jobs-in-Pune");
    }

    #[test]
    fn test_google_encodes_whole_phrase() {
        let links = build_search_links("Test Lead", "Chennai");
        assert_eq!(
            links.google,
            "https://www.google.com/search?q=Test%20Lead%20jobs%20in%20Chennai"
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let links = build_search_links("V&V Lead", "Bangalore");
        assert_eq!(
            links.indeed,
            "https://in.indeed.com/jobs?q=V%26V%20Lead&l=Bangalore"
        );
    }

    #[test]
    fn test_uri_component_unreserved_set_kept() {
        assert_eq!(encode("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode("CI/CD"), "CI%2FCD");
    }

    #[test]
    fn test_idempotent() {
        let a = build_search_links("Test Manager - Embedded", "Navi Mumbai");
        let b = build_search_links("Test Manager - Embedded", "Navi Mumbai");
        assert_eq!(a, b);
    }

    #[test]
    fn test_query_params_decode_to_inputs() {
        let role = "Senior Software Engineer in Test";
        let location = "São Paulo & Co";
        let links = build_search_links(role, location);

        assert_eq!(decode(query_param(&links.linkedin, "keywords")), role);
        assert_eq!(decode(query_param(&links.linkedin, "location")), location);
        assert_eq!(decode(query_param(&links.indeed, "q")), role);
        assert_eq!(decode(query_param(&links.adzuna, "where")), location);
        assert_eq!(
            decode(query_param(&links.google, "q")),
            format!("{role} jobs in {location}")
        );
    }

    #[test]
    fn test_every_portal_populated() {
        let links = build_search_links("", "");
        let keys: Vec<_> = links.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, PORTALS);
        assert!(links.iter().all(|(_, url)| url.starts_with("https://")));
    }

    #[test]
    fn test_serializes_with_all_portal_keys() {
        let value = serde_json::to_value(build_search_links("SDET", "Pune")).unwrap();
        for key in PORTALS {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
