//! Length-bounded text splitting for the summarization pipeline.

/// Split `text` into windows of at most `chunk_size` characters, carrying
/// `chunk_overlap` characters of context between adjacent windows.
///
/// Windows prefer to end at a newline, then at a space, within the tail
/// quarter of the window, so chunks tend to break on natural boundaries.
/// Splitting always happens on `char` boundaries. Text that fits in one
/// window is returned as a single chunk. An overlap of at least
/// `chunk_size` is clamped so the walk over the text always advances.
pub fn split_text(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<String> {
    if chunk_size == 0 {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= chunk_size {
        return vec![text.to_string()];
    }

    let overlap = chunk_overlap.min(chunk_size - 1);
    let mut chunks = Vec::new();
    let mut start = 0usize;

    loop {
        let hard_end = (start + chunk_size).min(chars.len());
        let end = if hard_end == chars.len() {
            hard_end
        } else {
            // A preferred break inside the overlap carried from the
            // previous window would stall the walk.
            preferred_break(&chars, start, hard_end).max(start + overlap + 1)
        };

        chunks.push(chars[start..end].iter().collect());

        if end == chars.len() {
            return chunks;
        }
        start = end - overlap;
    }
}

/// Look for a newline, then a space, in the tail quarter of the window.
/// Returns the index one past the break character, or `hard_end` when the
/// tail has no usable break.
fn preferred_break(chars: &[char], start: usize, hard_end: usize) -> usize {
    let window = hard_end - start;
    let floor = hard_end - (window / 4).max(1);

    for idx in (floor..hard_end).rev() {
        if chars[idx] == '\n' {
            return idx + 1;
        }
    }
    for idx in (floor..hard_end).rev() {
        if chars[idx] == ' ' {
            return idx + 1;
        }
    }

    hard_end
}
