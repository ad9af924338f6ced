use docfinder_core::models::SortKey;

pub(super) fn parse_sort_key(raw: &str) -> std::result::Result<SortKey, String> {
    raw.parse::<SortKey>().map_err(|err| err.to_string())
}
