//! Pagination utilities.
//!
//! Text is split into pages of at most `chars_per_page` characters. Whole
//! paragraphs are kept together when they fit; longer ones are broken on word
//! boundaries so every page fits its fixed-size container.

use tracing::debug;

/// Split `text` into pages. Blank or whitespace-only text yields no pages.
pub fn paginate(text: &str, chars_per_page: usize) -> Vec<String> {
    let limit = chars_per_page.max(1);
    let mut pages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for para in split_paragraphs(text) {
        for chunk in split_long_paragraph(&para, limit) {
            let chunk_len = chunk.chars().count();
            let separator_len = if current.is_empty() { 0 } else { 2 };

            if !current.is_empty() && current_len + separator_len + chunk_len > limit {
                pages.push(std::mem::take(&mut current));
                current_len = 0;
            }

            if current.is_empty() {
                current.push_str(&chunk);
                current_len = chunk_len;
            } else {
                current.push_str("\n\n");
                current.push_str(&chunk);
                current_len += separator_len + chunk_len;
            }
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }

    debug!(pages = pages.len(), chars_per_page = limit, "Paginated text");
    pages
}

/// Split text into paragraphs separated by blank lines.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut buffer = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !buffer.is_empty() {
                paragraphs.push(buffer.join("\n"));
                buffer.clear();
            }
        } else {
            buffer.push(line.trim_end());
        }
    }

    if !buffer.is_empty() {
        paragraphs.push(buffer.join("\n"));
    }

    paragraphs
}

fn split_long_paragraph(para: &str, limit: usize) -> Vec<String> {
    if para.chars().count() <= limit {
        return vec![para.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in para.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > limit {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(limit) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let separator_len = usize::from(!current.is_empty());
        if current_len + separator_len + word_len > limit {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_pages() {
        assert!(paginate("", 100).is_empty());
        assert!(paginate("  \n\n \n", 100).is_empty());
    }

    #[test]
    fn short_paragraphs_share_a_page() {
        let pages = paginate("one\n\ntwo\n\nthree", 100);
        assert_eq!(pages, vec!["one\n\ntwo\n\nthree".to_string()]);
    }

    #[test]
    fn paragraphs_move_to_next_page_when_full() {
        let pages = paginate("aaaa\n\nbbbb\n\ncccc", 10);
        assert_eq!(pages, vec!["aaaa\n\nbbbb".to_string(), "cccc".to_string()]);
    }

    #[test]
    fn long_paragraphs_break_on_words() {
        let text = "alpha beta gamma delta epsilon";
        let pages = paginate(text, 12);
        assert!(pages.iter().all(|page| page.chars().count() <= 12));
        assert_eq!(pages.join(" "), text);
    }

    #[test]
    fn oversized_words_are_hard_split() {
        let pages = paginate("abcdefghij", 4);
        assert_eq!(pages, vec!["abcd", "efgh", "ij"]);
    }
}
