//! Text folding shared by the keyword tables, incoming messages and stored
//! scenario triggers. Matching only works if all three go through `normalize`.

/// Lower-case `text` and strip Vietnamese diacritics (tone marks, vowel
/// modifiers and `đ`), accepting both precomposed and combining forms.
///
/// Characters outside the Vietnamese alphabet are only lower-cased.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        if is_vietnamese_combining_mark(ch) {
            continue;
        }
        out.push(fold_char(ch));
    }
    out
}

fn is_vietnamese_combining_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}' // grave
            | '\u{0301}' // acute
            | '\u{0302}' // circumflex
            | '\u{0303}' // tilde
            | '\u{0306}' // breve
            | '\u{0309}' // hook above
            | '\u{031B}' // horn
            | '\u{0323}' // dot below
    )
}

fn fold_char(ch: char) -> char {
    match ch {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_precomposed_diacritics() {
        assert_eq!(
            normalize("Tôi bị stress vì bài kiểm tra sắp tới"),
            "toi bi stress vi bai kiem tra sap toi"
        );
        assert_eq!(normalize("Lười biếng, trì hoãn"), "luoi bieng, tri hoan");
    }

    #[test]
    fn folds_d_with_stroke_in_both_cases() {
        assert_eq!(normalize("Đi ngủ đúng giờ"), "di ngu dung gio");
    }

    #[test]
    fn strips_combining_marks() {
        // "tự tử" written with decomposed marks
        let decomposed = "tu\u{031B}\u{0323} tu\u{031B}\u{0309}";
        assert_eq!(normalize(decomposed), "tu tu");
    }

    #[test]
    fn leaves_ascii_untouched_except_case() {
        assert_eq!(normalize("Hello ADHD 24/7!"), "hello adhd 24/7!");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize("Mất ngủ, KHÓ NGỦ quá");
        assert_eq!(normalize(&once), once);
        assert_eq!(once, "mat ngu, kho ngu qua");
    }
}
