#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn read_env_u64(name: &str, default_value: u64, min_value: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

#[must_use]
pub(super) fn split_csv(raw: &str) -> Vec<String> {
    let mut out = Vec::<String>::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !out.iter().any(|existing| existing == token) {
            out.push(token.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::split_csv;

    #[test]
    fn split_csv_trims_drops_blanks_and_dedups_in_order() {
        assert_eq!(
            split_csv(" In Clinic ,, Video Consult,In Clinic,"),
            vec!["In Clinic".to_string(), "Video Consult".to_string()]
        );
    }

    #[test]
    fn split_csv_of_blank_input_is_empty() {
        assert!(split_csv("  ,  ").is_empty());
    }
}
