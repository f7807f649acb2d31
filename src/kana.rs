//! Character-level kana classification and normalization.

/// Prolonged sound mark ー (U+30FC). Shared by katakana and hiragana text.
const PROLONGED_SOUND_MARK: char = '\u{30FC}';
/// Katakana middle dot ・ (U+30FB), used as a word separator in loanwords.
const INTERPUNCT: char = '\u{30FB}';

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// True if any character of `text` lies in the katakana block.
pub fn contains_katakana(text: &str) -> bool {
    text.chars().any(is_katakana)
}

/// Convert katakana to hiragana by the fixed 0x60 block offset.
///
/// The prolonged sound mark and the interpunct sit in the katakana block but
/// have no hiragana counterpart and pass through, as does every non-katakana
/// character. Length and order are preserved, so mixed hiragana/katakana
/// loanword readings come out with only the katakana spans rewritten.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_katakana(c) && c != PROLONGED_SOUND_MARK && c != INTERPUNCT {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn katakana_block_boundaries() {
        assert!(is_katakana('\u{30A0}'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_katakana('\u{30FF}'));
        assert!(!is_katakana('あ'));
        assert!(!is_katakana('\u{309F}'));
        assert!(!is_katakana('\u{3100}'));
        assert!(!is_katakana('a'));
    }

    #[test]
    fn contains_katakana_mixed() {
        assert!(contains_katakana("リューチュー島"));
        assert!(contains_katakana("とうキョう"));
        assert!(!contains_katakana("とうきょう"));
        assert!(!contains_katakana("東京"));
        assert!(!contains_katakana(""));
    }

    #[test]
    fn conversion_shifts_by_fixed_offset() {
        assert_eq!(katakana_to_hiragana("カタカナ"), "かたかな");
        assert_eq!(katakana_to_hiragana("パリ"), "ぱり");
        for c in "アイウエオガザダバパ".chars() {
            let converted: Vec<char> = katakana_to_hiragana(&c.to_string()).chars().collect();
            assert_eq!(converted.len(), 1);
            assert_eq!(converted[0] as u32, c as u32 - 0x60);
        }
    }

    #[test]
    fn prolonged_mark_and_interpunct_pass_through() {
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana("ケソン・シティー"), "けそん・してぃー");
    }

    #[test]
    fn non_katakana_passes_through() {
        assert_eq!(katakana_to_hiragana("ひらがな"), "ひらがな");
        assert_eq!(katakana_to_hiragana("東京 abc"), "東京 abc");
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = katakana_to_hiragana("リューチューとう");
        assert_eq!(katakana_to_hiragana(&once), once);
    }
}
