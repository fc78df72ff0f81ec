/// Word-count classification bands used to reward longer, more specific phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    Short,
    MidTail,
    LongTail,
}

/// Classify a combo's word count. The impact scorer's length bonus and any display
/// logic must share this single function; the bands are exactly 3 words (mid-tail) and
/// exactly 4 words (long-tail), everything else is short.
pub fn classify_length(word_count: usize) -> LengthClass {
    match word_count {
        3 => LengthClass::MidTail,
        4 => LengthClass::LongTail,
        _ => LengthClass::Short,
    }
}
