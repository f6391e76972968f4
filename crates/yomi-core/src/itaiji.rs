//! Variant character (itaiji) normalization.
//!
//! Dictionary keys and lookahead text are folded through this table before
//! any dictionary access, so 國 and 国 resolve to the same entries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

/// Built-in variant pairs: traditional (kyujitai) form to its modern
/// simplified form.
const BUILTIN: &[(char, char)] = &[
    ('亞', '亜'),
    ('惡', '悪'),
    ('壓', '圧'),
    ('圍', '囲'),
    ('爲', '為'),
    ('醫', '医'),
    ('壹', '壱'),
    ('榮', '栄'),
    ('營', '営'),
    ('驛', '駅'),
    ('圓', '円'),
    ('鹽', '塩'),
    ('應', '応'),
    ('歐', '欧'),
    ('價', '価'),
    ('畫', '画'),
    ('會', '会'),
    ('壞', '壊'),
    ('學', '学'),
    ('樂', '楽'),
    ('氣', '気'),
    ('舊', '旧'),
    ('擧', '挙'),
    ('區', '区'),
    ('驅', '駆'),
    ('縣', '県'),
    ('劍', '剣'),
    ('嚴', '厳'),
    ('廣', '広'),
    ('國', '国'),
    ('雜', '雑'),
    ('參', '参'),
    ('齒', '歯'),
    ('兒', '児'),
    ('實', '実'),
    ('寫', '写'),
    ('釋', '釈'),
    ('壽', '寿'),
    ('收', '収'),
    ('從', '従'),
    ('獸', '獣'),
    ('燒', '焼'),
    ('證', '証'),
    ('乘', '乗'),
    ('孃', '嬢'),
    ('讓', '譲'),
    ('眞', '真'),
    ('盡', '尽'),
    ('圖', '図'),
    ('醉', '酔'),
    ('數', '数'),
    ('聲', '声'),
    ('靜', '静'),
    ('齊', '斉'),
    ('戰', '戦'),
    ('淺', '浅'),
    ('雙', '双'),
    ('裝', '装'),
    ('藏', '蔵'),
    ('體', '体'),
    ('對', '対'),
    ('帶', '帯'),
    ('臺', '台'),
    ('澤', '沢'),
    ('單', '単'),
    ('團', '団'),
    ('斷', '断'),
    ('晝', '昼'),
    ('廳', '庁'),
    ('聽', '聴'),
    ('鎭', '鎮'),
    ('鐵', '鉄'),
    ('轉', '転'),
    ('點', '点'),
    ('傳', '伝'),
    ('黨', '党'),
    ('當', '当'),
    ('鬪', '闘'),
    ('獨', '独'),
    ('讀', '読'),
    ('貳', '弐'),
    ('腦', '脳'),
    ('廢', '廃'),
    ('拜', '拝'),
    ('賣', '売'),
    ('麥', '麦'),
    ('發', '発'),
    ('髮', '髪'),
    ('拔', '抜'),
    ('濱', '浜'),
    ('拂', '払'),
    ('佛', '仏'),
    ('變', '変'),
    ('邊', '辺'),
    ('辨', '弁'),
    ('寶', '宝'),
    ('豐', '豊'),
    ('滿', '満'),
    ('藥', '薬'),
    ('譯', '訳'),
    ('豫', '予'),
    ('餘', '余'),
    ('與', '与'),
    ('譽', '誉'),
    ('樣', '様'),
    ('來', '来'),
    ('亂', '乱'),
    ('覽', '覧'),
    ('龍', '竜'),
    ('兩', '両'),
    ('壘', '塁'),
    ('勵', '励'),
    ('禮', '礼'),
    ('靈', '霊'),
    ('齡', '齢'),
    ('戀', '恋'),
    ('爐', '炉'),
    ('勞', '労'),
    ('樓', '楼'),
    ('灣', '湾'),
];

/// Variant-to-canonical character table. Identity for unmapped characters.
#[derive(Debug, Clone)]
pub struct ItaijiTable {
    table: HashMap<char, char>,
}

impl ItaijiTable {
    /// Builds the table from the built-in variant pairs.
    pub fn new() -> Self {
        ItaijiTable {
            table: BUILTIN.iter().copied().collect(),
        }
    }

    /// Builds the built-in table, then merges pairs from a text file where
    /// each non-empty line holds a variant character followed by its
    /// canonical form. A missing or unreadable file degrades to the built-in
    /// table; bad lines are skipped. Never fatal.
    pub fn load(path: &Path) -> Self {
        let mut dict = Self::new();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), %err, "itaiji table not loaded, using built-in pairs");
                return dict;
            }
        };
        for line in text.lines() {
            let mut chars = line.trim().chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(variant), Some(canonical), None) => {
                    dict.table.insert(variant, canonical);
                }
                (None, _, _) => {}
                _ => warn!(line, "ignored malformed itaiji line"),
            }
        }
        dict
    }

    /// Returns the canonical form of `ch`, or `ch` itself when unmapped.
    pub fn get(&self, ch: char) -> char {
        self.table.get(&ch).copied().unwrap_or(ch)
    }

    /// Normalizes every character of `text`.
    pub fn normalize(&self, text: &str) -> String {
        text.chars().map(|ch| self.get(ch)).collect()
    }
}

impl Default for ItaijiTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn maps_known_variants() {
        let dict = ItaijiTable::new();
        assert_eq!(dict.get('體'), '体');
        assert_eq!(dict.get('國'), '国');
    }

    #[test]
    fn identity_for_unmapped() {
        let dict = ItaijiTable::new();
        assert_eq!(dict.get('体'), '体');
        assert_eq!(dict.get('a'), 'a');
    }

    #[test]
    fn normalizes_strings() {
        let dict = ItaijiTable::new();
        assert_eq!(dict.normalize("體力國"), "体力国");
    }

    #[test]
    fn load_merges_file_pairs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "舊旧").unwrap();
        writeln!(file, "國王").unwrap();
        file.flush().unwrap();
        let dict = ItaijiTable::load(file.path());
        assert_eq!(dict.get('舊'), '旧');
        // file pair overrides the built-in one
        assert_eq!(dict.get('國'), '王');
        // built-ins survive the merge
        assert_eq!(dict.get('體'), '体');
    }

    #[test]
    fn load_missing_file_uses_builtin() {
        let dict = ItaijiTable::load(Path::new("/nonexistent/itaijidict"));
        assert_eq!(dict.get('體'), '体');
    }
}
