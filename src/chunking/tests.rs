use super::ChunkAccumulator;
use crate::types::{ChunkConfig, FormattedChunk, DEFAULT_CHUNK_MAX_LENGTH};

const ALPHABET_WORDS: [&str; 9] = ["abc", "def", "ghi", "jkl", "mno", "pqr", "stu", "vwx", "yza"];

fn paragraph(word: &str) -> String {
    format!("<p>{word}</p>")
}

fn alphabet_accumulator() -> ChunkAccumulator {
    let mut accumulator = ChunkAccumulator::with_max_length(10);
    for word in ALPHABET_WORDS {
        accumulator.add(word, paragraph(word));
    }
    accumulator
}

#[test]
fn test_default_max_length() {
    let accumulator = ChunkAccumulator::default();
    assert_eq!(accumulator.max_length(), DEFAULT_CHUNK_MAX_LENGTH);
    assert_eq!(ChunkConfig::default().max_length, 1024);
}

#[test]
fn test_empty_accumulator_has_no_chunks() {
    let accumulator = ChunkAccumulator::with_max_length(10);
    assert!(accumulator.chunks().is_empty());
    assert!(accumulator.into_chunks().is_empty());
}

#[test]
fn test_single_chunk() {
    let mut accumulator = ChunkAccumulator::with_max_length(10);
    accumulator.add("alex", "<p>alex</p>");
    let chunks = accumulator.chunks();
    assert_eq!(
        chunks,
        vec![FormattedChunk {
            raw: "alex".to_string(),
            html: "<p>alex</p>".to_string(),
        }]
    );
}

#[test]
fn test_multiple_chunks() {
    let chunks = alphabet_accumulator().chunks();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].raw, "abc def ghi jkl");
    assert_eq!(chunks[0].html, "<p>abc</p><p>def</p><p>ghi</p><p>jkl</p>");
    assert_eq!(chunks[1].raw, "mno pqr stu vwx");
    assert_eq!(chunks[1].html, "<p>mno</p><p>pqr</p><p>stu</p><p>vwx</p>");
    assert_eq!(chunks[2].raw, "yza");
    assert_eq!(chunks[2].html, "<p>yza</p>");
}

#[test]
fn test_reaching_max_length_does_not_seal() {
    let mut accumulator = ChunkAccumulator::with_max_length(6);
    accumulator.add("abc", "a");
    accumulator.add("def", "b");
    assert_eq!(accumulator.sealed_count(), 0);
    accumulator.add("g", "c");
    assert_eq!(accumulator.sealed_count(), 1);
    assert_eq!(accumulator.chunks()[0].raw, "abc def g");
}

#[test]
fn test_separator_is_not_counted() {
    let mut accumulator = ChunkAccumulator::with_max_length(4);
    for word in ["a", "b", "c", "d"] {
        accumulator.add(word, word);
    }
    assert_eq!(accumulator.sealed_count(), 0);
    accumulator.add("e", "e");
    assert_eq!(accumulator.sealed_count(), 1);
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let mut accumulator = ChunkAccumulator::with_max_length(3);
    accumulator.add("éèê", "<p>éèê</p>");
    assert_eq!(accumulator.sealed_count(), 0);
}

#[test]
fn test_zero_length_raw_is_kept_but_never_seals() {
    let mut accumulator = ChunkAccumulator::with_max_length(5);
    accumulator.add("ab", "<p>ab</p>");
    accumulator.add("", "<hr>");
    accumulator.add("cd", "<p>cd</p>");
    assert_eq!(accumulator.sealed_count(), 0);
    let chunks = accumulator.chunks();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].raw, "ab  cd");
    assert_eq!(chunks[0].html, "<p>ab</p><hr><p>cd</p>");
}

#[test]
fn test_only_empty_raw_yields_no_chunks() {
    let mut accumulator = ChunkAccumulator::with_max_length(5);
    accumulator.add("", "<p></p>");
    assert!(accumulator.chunks().is_empty());
}

#[test]
fn test_chunks_is_idempotent() {
    let accumulator = alphabet_accumulator();
    let first = accumulator.chunks();
    let second = accumulator.chunks();
    assert_eq!(first, second);
    assert_eq!(accumulator.sealed_count(), 2);
    assert_eq!(accumulator.clone().into_chunks(), first);
}

#[test]
fn test_chunking_is_deterministic() {
    assert_eq!(alphabet_accumulator().chunks(), alphabet_accumulator().chunks());
}

#[test]
fn test_raw_text_reconstructs_input() {
    for max_length in [1, 3, 7, 10, 50] {
        let mut accumulator = ChunkAccumulator::with_max_length(max_length);
        for word in ALPHABET_WORDS {
            accumulator.add(word, paragraph(word));
        }
        let chunks = accumulator.into_chunks();
        let rebuilt = chunks
            .iter()
            .map(|chunk| chunk.raw.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rebuilt, ALPHABET_WORDS.join(" "), "max_length={max_length}");
        let html: String = chunks.iter().map(|chunk| chunk.html.as_str()).collect();
        let expected: String = ALPHABET_WORDS.iter().map(|word| paragraph(word)).collect();
        assert_eq!(html, expected, "max_length={max_length}");
    }
}

#[test]
fn test_sealed_chunks_exceed_max_length() {
    let mut accumulator = ChunkAccumulator::with_max_length(7);
    for word in ALPHABET_WORDS {
        accumulator.add(word, paragraph(word));
    }
    assert_eq!(accumulator.sealed_count(), 3);
    for chunk in accumulator.chunks() {
        let length: usize = chunk.raw.split(' ').map(str::len).sum();
        assert!(length > 7, "sealed chunk too short: {:?}", chunk.raw);
    }
}
