//! Incremental line assembly over raw byte chunks.

/// Stateful decoder that turns a sequence of byte chunks into complete
/// protocol lines.
///
/// Chunks arrive with no framing guarantee: one chunk may hold zero, one,
/// or many lines, and may split a line or a multi-byte UTF-8 sequence at
/// any byte. The decoder buffers at the byte level and only decodes text
/// once a full line (LF-terminated, optional trailing CR) is present, so a
/// code point split across reads is reassembled rather than garbled.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    /// Bytes of the current unterminated line, carried between feeds.
    buf: Vec<u8>,
}

impl FrameDecoder {
    /// Create a new decoder with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk, returning every line completed by it, in order.
    ///
    /// Lines are yielded without their terminator. Trailing bytes after
    /// the last newline stay buffered for the next feed.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// Take the unterminated trailing fragment, if any.
    ///
    /// Called at end of stream. The fragment is not a line (the protocol
    /// terminates every event with a newline) and the transport discards
    /// it; it is returned here so the caller can log what was dropped.
    pub fn flush(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let tail = std::mem::take(&mut self.buf);
        Some(String::from_utf8_lossy(&tail).into_owned())
    }

    /// Clear any buffered state.
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_complete_line() {
        let mut decoder = FrameDecoder::new();
        let lines = decoder.feed(b"data: hello\n");
        assert_eq!(lines, vec!["data: hello"]);
        assert_eq!(decoder.flush(), None);
    }

    #[test]
    fn test_multiple_lines_one_chunk() {
        let mut decoder = FrameDecoder::new();
        let lines = decoder.feed(b"one\ntwo\nthree\n");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(b"data: hel").is_empty());
        let lines = decoder.feed(b"lo\n");
        assert_eq!(lines, vec!["data: hello"]);
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        let mut decoder = FrameDecoder::new();
        let lines = decoder.feed(b"data: hi\r\nnext\r\n");
        assert_eq!(lines, vec!["data: hi", "next"]);
    }

    #[test]
    fn test_empty_lines_preserved() {
        let mut decoder = FrameDecoder::new();
        let lines = decoder.feed(b"\n\ndata: x\n");
        assert_eq!(lines, vec!["", "", "data: x"]);
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let mut decoder = FrameDecoder::new();
        // "héllo" with the two-byte é split between chunks
        let bytes = "data: h\u{e9}llo\n".as_bytes();
        let split = bytes.iter().position(|&b| b == 0xc3).unwrap() + 1;
        assert!(decoder.feed(&bytes[..split]).is_empty());
        let lines = decoder.feed(&bytes[split..]);
        assert_eq!(lines, vec!["data: h\u{e9}llo"]);
    }

    #[test]
    fn test_four_byte_char_split_three_ways() {
        let mut decoder = FrameDecoder::new();
        let bytes = "\u{1f600}\n".as_bytes();
        assert!(decoder.feed(&bytes[..1]).is_empty());
        assert!(decoder.feed(&bytes[1..3]).is_empty());
        let lines = decoder.feed(&bytes[3..]);
        assert_eq!(lines, vec!["\u{1f600}"]);
    }

    #[test]
    fn test_any_split_pattern_matches_whole_feed() {
        let payload = "data: {\"delta\":\"caf\u{e9}\"}\n\ndata: {\"done\":true}\n";
        let bytes = payload.as_bytes();

        let mut whole = FrameDecoder::new();
        let expected = whole.feed(bytes);

        for split in 1..bytes.len() {
            let mut decoder = FrameDecoder::new();
            let mut lines = decoder.feed(&bytes[..split]);
            lines.extend(decoder.feed(&bytes[split..]));
            assert_eq!(lines, expected, "split at byte {}", split);
            assert_eq!(decoder.flush(), None);
        }
    }

    #[test]
    fn test_flush_returns_trailing_fragment() {
        let mut decoder = FrameDecoder::new();
        let lines = decoder.feed(b"complete\npartial");
        assert_eq!(lines, vec!["complete"]);
        assert_eq!(decoder.flush(), Some("partial".to_string()));
        assert_eq!(decoder.flush(), None);
    }

    #[test]
    fn test_reset_discards_buffer() {
        let mut decoder = FrameDecoder::new();
        decoder.feed(b"partial");
        decoder.reset();
        let lines = decoder.feed(b"fresh\n");
        assert_eq!(lines, vec!["fresh"]);
    }
}
