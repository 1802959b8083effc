//! Share URLs
//!
//! Links look like `{origin}/share?data={payload}`.

use crate::error::BudgetSplitResult;
use crate::models::BudgetInput;

use super::codec::encode_plan;

/// Path of the read-only share page
pub const SHARE_PATH: &str = "/share";

/// Query parameter holding the encoded plan
pub const SHARE_QUERY_PARAM: &str = "data";

/// Detail carried by `InvalidShareData` when a link has no payload at all
pub const MISSING_SHARE_DATA: &str = "link is missing data";

/// Build a share link for `plan` under `base` (an origin such as `https://example.com`)
pub fn share_url(base: &str, plan: &BudgetInput) -> BudgetSplitResult<String> {
    let data = encode_plan(plan)?;
    Ok(format!(
        "{}{}?{}={}",
        base.trim_end_matches('/'),
        SHARE_PATH,
        SHARE_QUERY_PARAM,
        data
    ))
}

/// Pull the encoded payload out of a share link, or pass a bare payload through
///
/// Returns `None` when the text is a URL without a non-empty `data`
/// parameter, or is blank.
pub fn extract_share_data(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let Some((_, query)) = text.split_once('?') else {
        // No query string: a URL without data, or a bare payload
        let looks_like_url = text.contains("://") || text.starts_with('/');
        return (!looks_like_url).then_some(text);
    };

    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_QUERY_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Household;
    use crate::share::decode_plan;

    #[test]
    fn test_share_url_shape() {
        let plan = BudgetInput::new(Household::Individual, 100.0);
        let url = share_url("https://example.com/", &plan).unwrap();
        assert!(url.starts_with("https://example.com/share?data="));
    }

    #[test]
    fn test_share_url_round_trip() {
        let plan = BudgetInput::new(Household::couple(5.0), 100.0).with_bill("Rent", 50.0);
        let url = share_url("http://localhost:3000", &plan).unwrap();
        let data = extract_share_data(&url).unwrap();
        assert_eq!(decode_plan(data).unwrap(), plan);
    }

    #[test]
    fn test_extract_from_query() {
        assert_eq!(
            extract_share_data("https://x.io/share?foo=1&data=abc.&bar=2#top"),
            Some("abc.")
        );
    }

    #[test]
    fn test_extract_bare_payload() {
        assert_eq!(extract_share_data("  eyJhIjoxfQ..  "), Some("eyJhIjoxfQ.."));
    }

    #[test]
    fn test_missing_data() {
        assert_eq!(extract_share_data("https://x.io/share"), None);
        assert_eq!(extract_share_data("https://x.io/share?data="), None);
        assert_eq!(extract_share_data("https://x.io/share?other=1"), None);
        assert_eq!(extract_share_data("/share"), None);
        assert_eq!(extract_share_data("   "), None);
    }
}
