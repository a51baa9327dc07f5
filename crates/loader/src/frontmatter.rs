use casebook_model::RawFrontMatter;

use crate::error::{LoaderError, Result};

/// Check for a front-matter fence line: exactly `---`, CR tolerated
fn is_fence(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == "---"
}

/// Split a document into its front-matter block and body.
///
/// A document opens a front-matter block only when its very first line is a
/// fence. A leading byte-order mark is ignored. No fence means the whole
/// text is body. An opening fence without a closing one is malformed.
pub(crate) fn split_front_matter(raw: &str) -> Result<(Option<&str>, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(first_end) = raw.find('\n') else {
        return if is_fence(raw) {
            Err(LoaderError::UnterminatedFrontMatter)
        } else {
            Ok((None, raw))
        };
    };
    if !is_fence(&raw[..first_end]) {
        return Ok((None, raw));
    }

    let block_start = first_end + 1;
    let mut offset = block_start;
    for line in raw[block_start..].split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        if is_fence(content) {
            let block = &raw[block_start..offset];
            let body = &raw[offset + line.len()..];
            return Ok((Some(block), body));
        }
        offset += line.len();
    }
    Err(LoaderError::UnterminatedFrontMatter)
}

/// Parse a document's front matter into the raw schema.
///
/// Documents without a block, and blocks that are empty or comments-only,
/// yield the all-absent raw record so the usual defaults apply downstream.
pub(crate) fn parse_front_matter(text: &str) -> Result<RawFrontMatter> {
    let (block, _body) = split_front_matter(text)?;
    match block {
        Some(block) => {
            let raw: Option<RawFrontMatter> = serde_yaml::from_str(block)?;
            Ok(raw.unwrap_or_default())
        }
        None => Ok(RawFrontMatter::default()),
    }
}
