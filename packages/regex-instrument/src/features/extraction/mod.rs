//! Static regex extraction
//!
//! Lists the regexes of a file whose pattern and flags are both known
//! without running it. Shares detection with instrumentation; sites with a
//! runtime part are left out.

use serde::{Deserialize, Serialize};

use crate::config::InstrumentConfig;
use crate::errors::Result;
use crate::features::parsing::{LanguageId, Parser, TreeSitterParser};
use crate::features::site_detection::RegexSiteDetector;

/// One statically known regex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegex {
    pub pattern: String,
    pub flags: String,
}

/// Extraction record for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRegexes {
    pub file_name: String,
    pub language: LanguageId,
    /// 1 if the file parsed without syntax errors, else 0
    pub could_parse: u8,
    pub regexes: Vec<StaticRegex>,
}

impl FileRegexes {
    /// Single NDJSON line (no trailing newline)
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(std::io::Error::from)?)
    }
}

/// Extract the statically known regexes of `source`
///
/// A file with syntax errors is reported with `could_parse == 0` and no
/// regexes rather than as an error.
pub fn extract_static_regexes(
    source: &str,
    file_path: &str,
    config: &InstrumentConfig,
) -> Result<FileRegexes> {
    let parser = TreeSitterParser::for_path(file_path, config.language);
    let tree = parser.parse(source, file_path)?;

    if tree.has_errors() {
        return Ok(FileRegexes {
            file_name: file_path.to_string(),
            language: parser.language(),
            could_parse: 0,
            regexes: Vec::new(),
        });
    }

    let regexes = RegexSiteDetector::new(config)
        .detect(&tree)
        .sites
        .into_iter()
        .filter_map(|site| match (site.pattern, site.flags) {
            (Some(pattern), Some(flags)) if site.pattern_known && site.flags_known => {
                Some(StaticRegex { pattern, flags })
            }
            _ => None,
        })
        .collect();

    Ok(FileRegexes {
        file_name: file_path.to_string(),
        language: parser.language(),
        could_parse: 1,
        regexes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(source: &str, path: &str) -> FileRegexes {
        extract_static_regexes(source, path, &InstrumentConfig::default()).unwrap()
    }

    #[test]
    fn test_extracts_static_sites_only() {
        let result = extract(
            "const a = /x+/g; const b = new RegExp('y', 'i'); const c = new RegExp(dyn);",
            "lib.js",
        );
        assert_eq!(result.could_parse, 1);
        assert_eq!(
            result.regexes,
            vec![
                StaticRegex {
                    pattern: "x+".to_string(),
                    flags: "g".to_string()
                },
                StaticRegex {
                    pattern: "y".to_string(),
                    flags: "i".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unparseable_file() {
        let result = extract("const = /x/;", "broken.js");
        assert_eq!(result.could_parse, 0);
        assert!(result.regexes.is_empty());
    }

    #[test]
    fn test_json_line_shape() {
        let result = extract("let r: RegExp = /a/u;", "mod.ts");
        assert_eq!(
            result.to_json_line().unwrap(),
            r#"{"fileName":"mod.ts","language":"typescript","couldParse":1,"regexes":[{"pattern":"a","flags":"u"}]}"#
        );
    }
}
