use super::position::{Position, Span};

/// Replace the text in `span` with `new_text`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(range: Span, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self::replace(Span::new(at, at), text)
    }

    pub fn delete(range: Span) -> Self {
        Self::replace(range, String::new())
    }

    /// Apply non-overlapping edits to `source`.
    ///
    /// Positions are 0-based lines and character columns. Edits are applied
    /// back to front so earlier ranges stay valid.
    pub fn apply_all(source: &str, edits: &[TextEdit]) -> String {
        let mut ordered: Vec<&TextEdit> = edits.iter().collect();
        ordered.sort_by(|a, b| b.range.start.cmp(&a.range.start));

        let mut text = source.to_string();
        for edit in ordered {
            let start = byte_offset(&text, edit.range.start);
            let end = byte_offset(&text, edit.range.end).max(start);
            text.replace_range(start..end, &edit.new_text);
        }
        text
    }
}

/// Byte offset of `position`, clamped to the end of its line
fn byte_offset(text: &str, position: Position) -> usize {
    let mut line_start = 0;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(newline) => line_start += newline + 1,
            None => return text.len(),
        }
    }

    let line = &text[line_start..];
    let line_len = line.find('\n').unwrap_or(line.len());
    let column = line[..line_len]
        .char_indices()
        .nth(position.column as usize)
        .map(|(offset, _)| offset)
        .unwrap_or(line_len);
    line_start + column
}
