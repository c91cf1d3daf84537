use std::cmp::Reverse;

use super::UserRemapping;

/// Picks the best-matching remapping for an import, the way solc/Hardhat do:
/// the remapping must match both the importing context and the import's
/// direct prefix, and ties break on longest context, then longest prefix,
/// then earliest declaration.
pub fn select<'a>(remappings: &'a [UserRemapping], context: &str, direct: &str) -> Option<&'a UserRemapping> {
    remappings
        .iter()
        .enumerate()
        .filter(|(_, r)| context.starts_with(r.context.as_str()) && direct.starts_with(r.prefix.as_str()))
        .max_by_key(|(i, r)| (r.context.len(), r.prefix.len(), Reverse(*i)))
        .map(|(_, r)| r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remapping(context: &str, prefix: &str, target: &str) -> UserRemapping {
        UserRemapping {
            raw_text: format!("{context}:{prefix}={target}"),
            context: context.to_string(),
            prefix: prefix.to_string(),
            target: target.to_string(),
            target_package: None,
        }
    }

    #[test]
    fn longest_prefix_wins() {
        let remappings =
            vec![remapping("", "dep/", "npm/dep@1.0.0/"), remapping("", "dep/sub/", "npm/dep-sub@1.0.0/")];
        let chosen = select(&remappings, "contracts/A.sol", "dep/sub/B.sol").unwrap();
        assert_eq!(chosen.target, "npm/dep-sub@1.0.0/");
    }

    #[test]
    fn longest_context_wins_over_declaration_order() {
        let remappings =
            vec![remapping("contracts/nested/", "dep/", "npm/a@1.0.0/"), remapping("contracts/", "dep/", "npm/b@1.0.0/")];
        let chosen = select(&remappings, "contracts/nested/A.sol", "dep/B.sol").unwrap();
        assert_eq!(chosen.target, "npm/a@1.0.0/");
    }

    #[test]
    fn earliest_declaration_wins_full_tie() {
        let remappings = vec![remapping("", "dep/", "npm/a@1.0.0/"), remapping("", "dep/", "npm/b@1.0.0/")];
        let chosen = select(&remappings, "contracts/A.sol", "dep/B.sol").unwrap();
        assert_eq!(chosen.target, "npm/a@1.0.0/");
    }

    #[test]
    fn no_match_when_prefix_differs() {
        let remappings = vec![remapping("", "dep/", "npm/a@1.0.0/")];
        assert!(select(&remappings, "contracts/A.sol", "other/B.sol").is_none());
    }
}
