//! hOCR `title` attribute scanning.
//!
//! A title holds `;`-separated properties such as
//! `image "page.png"; bbox 0 0 2480 3508; ppageno 0`. Only the `bbox`
//! property is of interest here.

use crate::error::{Error, Result};

const BBOX_KEYWORD: &str = "bbox";

/// Find the `bbox` clause of a title and split it into its four tokens.
///
/// Returns `Ok(None)` when no clause starts with `bbox`. The match is a
/// plain prefix test on the trimmed clause, so the first clause beginning
/// with those four characters is taken even if it is some other property.
/// Tokens past the fourth are ignored; fewer than four is an error.
pub fn bbox_tokens(title: &str) -> Result<Option<[&str; 4]>> {
    let Some(clause) = title
        .split(';')
        .map(str::trim_start)
        .find(|clause| clause.starts_with(BBOX_KEYWORD))
    else {
        return Ok(None);
    };

    let payload = clause[BBOX_KEYWORD.len()..].trim();
    let tokens: Vec<&str> = payload.split_whitespace().collect();
    match tokens.as_slice() {
        &[left, top, right, bottom, ..] => Ok(Some([left, top, right, bottom])),
        _ => Err(Error::InvalidBbox(format!(
            "expected 4 values in '{}', found {}",
            clause.trim_end(),
            tokens.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_only() {
        assert_eq!(
            bbox_tokens("bbox 0 0 100 200").unwrap(),
            Some(["0", "0", "100", "200"])
        );
    }

    #[test]
    fn test_bbox_among_other_clauses() {
        let title = "image \"scan.png\"; bbox 12 34 560 780; ppageno 0; scan_res 300 300";
        assert_eq!(
            bbox_tokens(title).unwrap(),
            Some(["12", "34", "560", "780"])
        );

        let title = "baseline 0.002 -9; x_size 31; bbox   5  6   7 8  ";
        assert_eq!(bbox_tokens(title).unwrap(), Some(["5", "6", "7", "8"]));
    }

    #[test]
    fn test_first_bbox_clause_wins() {
        let title = "bbox 1 2 3 4; bbox 5 6 7 8";
        assert_eq!(bbox_tokens(title).unwrap(), Some(["1", "2", "3", "4"]));
    }

    #[test]
    fn test_no_bbox_clause() {
        assert_eq!(bbox_tokens("x_wconf 93; x_fsize 12").unwrap(), None);
        assert_eq!(bbox_tokens("").unwrap(), None);
        // Keyword must start the clause.
        assert_eq!(bbox_tokens("image bbox.png").unwrap(), None);
    }

    #[test]
    fn test_prefix_match_is_loose() {
        // Any clause starting with "bbox" is taken as the box descriptor.
        assert_eq!(
            bbox_tokens("bboxes 1 2 3").unwrap(),
            Some(["es", "1", "2", "3"])
        );
        assert_eq!(
            bbox_tokens("bboxes 1 2 3 4").unwrap(),
            Some(["es", "1", "2", "3"])
        );
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert_eq!(
            bbox_tokens("bbox 0 0 100 200 7").unwrap(),
            Some(["0", "0", "100", "200"])
        );
        assert_eq!(
            bbox_tokens("bbox 1 2 3 4 5 6; x_wconf 90").unwrap(),
            Some(["1", "2", "3", "4"])
        );
    }

    #[test]
    fn test_wrong_token_count() {
        assert!(matches!(
            bbox_tokens("bbox 1 2 3"),
            Err(Error::InvalidBbox(_))
        ));
        assert!(matches!(bbox_tokens("bbox"), Err(Error::InvalidBbox(_))));
    }
}
