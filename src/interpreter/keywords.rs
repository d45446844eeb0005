use std::{collections::HashMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::interpreter::lexer::TokenKind;

/// A natural-language keyword set.
///
/// Programs may mix spellings freely; the set only matters when source text is
/// re-synthesized, where it selects which spelling each keyword gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSet {
    /// Simplified Chinese.
    Chinese,
    /// English.
    English,
    /// Japanese.
    Japanese,
    /// Korean.
    Korean,
    /// Russian.
    Russian,
}

/// Canonical spellings, one row per set, columns in [`TokenKind::KEYWORDS`]
/// order.
const CHINESE: [&str; 11] = ["如果", "否则", "循环", "打印", "定义", "返回", "当", "自动", "真", "假", "空"];
const ENGLISH: [&str; 11] =
    ["if", "else", "loop", "print", "def", "return", "while", "auto", "true", "false", "null"];
const JAPANESE: [&str; 11] =
    ["もし", "その他", "繰り返し", "表示", "定義", "戻る", "間", "自動", "真", "偽", "無"];
const KOREAN: [&str; 11] =
    ["만약", "아니면", "반복", "출력", "정의", "반환", "동안", "자동", "참", "거짓", "비어"];
const RUSSIAN: [&str; 11] = ["если",
                             "иначе",
                             "цикл",
                             "печать",
                             "определить",
                             "вернуть",
                             "пока",
                             "авто",
                             "истина",
                             "ложь",
                             "ноль"];

/// Extra English spellings that never win when rendering.
const ENGLISH_ALIASES: [(&str, TokenKind); 2] = [("for", TokenKind::Loop), ("var", TokenKind::Def)];

/// Every accepted spelling, from every set, mapped to its canonical kind.
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for set in KeywordSet::ALL {
        for (spelling, kind) in set.spellings().iter().zip(TokenKind::KEYWORDS) {
            table.insert(*spelling, kind);
        }
    }
    table.extend(ENGLISH_ALIASES);
    table
});

impl KeywordSet {
    /// All supported sets.
    pub const ALL: [Self; 5] = [Self::Chinese,
                                Self::English,
                                Self::Japanese,
                                Self::Korean,
                                Self::Russian];

    const fn spellings(self) -> &'static [&'static str; 11] {
        match self {
            Self::Chinese => &CHINESE,
            Self::English => &ENGLISH,
            Self::Japanese => &JAPANESE,
            Self::Korean => &KOREAN,
            Self::Russian => &RUSSIAN,
        }
    }

    /// Returns this set's canonical spelling of a keyword kind, or `None` if
    /// `kind` is not a keyword.
    ///
    /// ```
    /// use novolang::interpreter::{keywords::KeywordSet, lexer::TokenKind};
    ///
    /// assert_eq!(KeywordSet::Korean.spell(TokenKind::Print), Some("출력"));
    /// assert_eq!(KeywordSet::English.spell(TokenKind::Number), None);
    /// ```
    #[must_use]
    pub fn spell(self, kind: TokenKind) -> Option<&'static str> {
        let column = TokenKind::KEYWORDS.iter().position(|k| *k == kind)?;
        Some(self.spellings()[column])
    }
}

impl std::fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Chinese => "chinese",
            Self::English => "english",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Russian => "russian",
        };
        write!(f, "{name}")
    }
}

/// Looks up a word in the keyword table.
///
/// Returns the canonical kind for any supported spelling, or `None` when the
/// word is an ordinary identifier.
#[must_use]
pub fn lookup(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).copied()
}
