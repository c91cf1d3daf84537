//! Extracts raw import path strings from Solidity source text.
//!
//! This is the resolver's other consumed collaborator: a real front end would
//! normally hand these in after parsing a syntax tree (see
//! `foundry_compilers::resolver::parse::capture_imports` in the teacher
//! repo), but a regex-based extractor keeps this crate independently
//! testable without a Solidity parser in its dependency tree, the same
//! fallback the teacher's own parser takes when `solang-parser` fails.

use once_cell::sync::Lazy;
use regex::Regex;

pub trait ImportExtractor {
    /// Returns the raw import path strings found in `content`, in source
    /// order.
    fn extract(&self, content: &str) -> Vec<String>;
}

static SOL_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"import\s+(?:(?:"(?P<p1>.*)"|'(?P<p2>.*)')(?:\s+as\s+\w+)?|(?:(?:\w+(?:\s+as\s+\w+)?|\*\s*as\s+\w+|\{\s*(?:\w+(?:\s+as\s+\w+)?\s*,?\s*)+\s*\})\s+from\s+(?:"(?P<p3>.*)"|'(?P<p4>.*)')))\s*;"#,
    )
    .expect("SOL_IMPORT_RE is a valid regex")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexImportExtractor;

impl ImportExtractor for RegexImportExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        SOL_IMPORT_RE
            .captures_iter(content)
            .filter_map(|caps| ["p1", "p2", "p3", "p4"].iter().find_map(|name| caps.name(name)))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_import() {
        let content = r#"import "./Token.sol";"#;
        assert_eq!(RegexImportExtractor.extract(content), vec!["./Token.sol".to_string()]);
    }

    #[test]
    fn extracts_named_and_aliased_imports() {
        let content = r#"
            import {IERC20} from "dep/IERC20.sol";
            import {IERC20 as Token} from "dep/IERC20.sol";
            import * as Math from "./Math.sol";
        "#;
        assert_eq!(
            RegexImportExtractor.extract(content),
            vec!["dep/IERC20.sol".to_string(), "dep/IERC20.sol".to_string(), "./Math.sol".to_string()]
        );
    }

    #[test]
    fn ignores_non_import_statements() {
        let content = "pragma solidity ^0.8.0;\ncontract C {}";
        assert!(RegexImportExtractor.extract(content).is_empty());
    }
}
