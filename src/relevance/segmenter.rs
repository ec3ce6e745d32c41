//! Sentence segmentation
//!
//! Boundary rules: a run of `.`/`!`/`?` followed by whitespace (or end
//! of input) closes a sentence; newlines always close one. Segments
//! are trimmed and empty segments dropped.

/// Split text into an ordered sequence of trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            flush(&mut current, &mut sentences);
            continue;
        }

        current.push(c);

        if is_terminator(c) {
            // Swallow terminator runs like "..." and "?!"
            while let Some(&next) = chars.peek() {
                if !is_terminator(next) {
                    break;
                }
                current.push(next);
                chars.next();
            }

            // "3.14" stays intact: only whitespace (or EOF) ends a sentence
            let at_boundary = chars.peek().map_or(true, |n| n.is_whitespace());
            if at_boundary {
                flush(&mut current, &mut sentences);
            }
        }
    }

    flush(&mut current, &mut sentences);
    sentences
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn flush(current: &mut String, out: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    current.clear();
}
