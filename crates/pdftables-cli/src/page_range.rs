/// Parse a page range string like "1,3-5" into sorted, distinct page numbers.
///
/// Page numbers are 1-based both in the input and the output. Returns an
/// error for page 0, pages past `page_count`, reversed or malformed ranges.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((start, end)) => (parse_page(start, page_count)?, parse_page(end, page_count)?),
            None => {
                let page = parse_page(part, page_count)?;
                (page, page)
            }
        };
        if start > end {
            return Err(format!("invalid page range: '{part}'"));
        }
        pages.extend(start..=end);
    }

    if pages.is_empty() {
        return Err("page range selects no pages".to_string());
    }
    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

fn parse_page(text: &str, page_count: usize) -> Result<usize, String> {
    let text = text.trim();
    let page: usize = text
        .parse()
        .map_err(|_| format!("invalid page number: '{text}'"))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!(
            "page {page} exceeds document page count ({page_count})"
        ));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page() {
        assert_eq!(parse_page_range("1", 5).unwrap(), vec![1]);
        assert_eq!(parse_page_range("3", 5).unwrap(), vec![3]);
    }

    #[test]
    fn mixed_ranges() {
        assert_eq!(
            parse_page_range("1-3,7,10-12", 12).unwrap(),
            vec![1, 2, 3, 7, 10, 11, 12]
        );
    }

    #[test]
    fn page_zero_invalid() {
        let err = parse_page_range("0", 5).unwrap_err();
        assert!(err.contains("invalid"));
    }

    #[test]
    fn page_exceeds_count() {
        let err = parse_page_range("2-6", 5).unwrap_err();
        assert!(err.contains("exceeds"));
    }

    #[test]
    fn reversed_range_rejected() {
        let err = parse_page_range("4-2", 5).unwrap_err();
        assert!(err.contains("invalid page range"));
    }

    #[test]
    fn empty_selection_rejected() {
        assert!(parse_page_range(" , ", 5).is_err());
    }

    #[test]
    fn duplicates_and_whitespace() {
        assert_eq!(parse_page_range(" 2 , 1 - 2 ", 5).unwrap(), vec![1, 2]);
    }
}
