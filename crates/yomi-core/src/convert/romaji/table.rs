//! Kana to romaji substitution tables.
//!
//! Hiragana has no single vu character, so the hiragana rows spell it as
//! う plus the voice sound mark (う゛). The prolonged sound mark ー maps to
//! `^` in the katakana rows.

pub(super) const HIRAGANA_HEPBURN: &[(&str, &str)] = &[
    ("ぁ", "a"),
    ("あ", "a"),
    ("ぃ", "i"),
    ("い", "i"),
    ("ぅ", "u"),
    ("う", "u"),
    ("う゛", "vu"),
    ("う゛ぁ", "va"),
    ("う゛ぃ", "vi"),
    ("う゛ぇ", "ve"),
    ("う゛ぉ", "vo"),
    ("ぇ", "e"),
    ("え", "e"),
    ("ぉ", "o"),
    ("お", "o"),
    ("か", "ka"),
    ("が", "ga"),
    ("き", "ki"),
    ("きゃ", "kya"),
    ("きゅ", "kyu"),
    ("きょ", "kyo"),
    ("ぎ", "gi"),
    ("ぎゃ", "gya"),
    ("ぎゅ", "gyu"),
    ("ぎょ", "gyo"),
    ("く", "ku"),
    ("ぐ", "gu"),
    ("け", "ke"),
    ("げ", "ge"),
    ("こ", "ko"),
    ("ご", "go"),
    ("さ", "sa"),
    ("ざ", "za"),
    ("し", "shi"),
    ("しゃ", "sha"),
    ("しゅ", "shu"),
    ("しょ", "sho"),
    ("じ", "ji"),
    ("じゃ", "ja"),
    ("じゅ", "ju"),
    ("じょ", "jo"),
    ("す", "su"),
    ("ず", "zu"),
    ("せ", "se"),
    ("ぜ", "ze"),
    ("そ", "so"),
    ("ぞ", "zo"),
    ("た", "ta"),
    ("だ", "da"),
    ("ち", "chi"),
    ("ちゃ", "cha"),
    ("ちゅ", "chu"),
    ("ちょ", "cho"),
    ("ぢ", "di"),
    ("ぢゃ", "dya"),
    ("ぢゅ", "dyu"),
    ("ぢょ", "dyo"),
    ("っ", "tsu"),
    ("っう゛", "vvu"),
    ("っう゛ぁ", "vva"),
    ("っう゛ぃ", "vvi"),
    ("っう゛ぇ", "vve"),
    ("っう゛ぉ", "vvo"),
    ("っか", "kka"),
    ("っが", "gga"),
    ("っき", "kki"),
    ("っきゃ", "kkya"),
    ("っきゅ", "kkyu"),
    ("っきょ", "kkyo"),
    ("っぎ", "ggi"),
    ("っぎゃ", "ggya"),
    ("っぎゅ", "ggyu"),
    ("っぎょ", "ggyo"),
    ("っく", "kku"),
    ("っぐ", "ggu"),
    ("っけ", "kke"),
    ("っげ", "gge"),
    ("っこ", "kko"),
    ("っご", "ggo"),
    ("っさ", "ssa"),
    ("っざ", "zza"),
    ("っし", "sshi"),
    ("っしゃ", "ssha"),
    ("っしゅ", "sshu"),
    ("っしょ", "ssho"),
    ("っじ", "jji"),
    ("っじゃ", "jja"),
    ("っじゅ", "jju"),
    ("っじょ", "jjo"),
    ("っす", "ssu"),
    ("っず", "zzu"),
    ("っせ", "sse"),
    ("っぜ", "zze"),
    ("っそ", "sso"),
    ("っぞ", "zzo"),
    ("った", "tta"),
    ("っだ", "dda"),
    ("っち", "cchi"),
    ("っちゃ", "ccha"),
    ("っちゅ", "cchu"),
    ("っちょ", "ccho"),
    ("っぢ", "ddi"),
    ("っぢゃ", "ddya"),
    ("っぢゅ", "ddyu"),
    ("っぢょ", "ddyo"),
    ("っつ", "ttsu"),
    ("っづ", "ddu"),
    ("って", "tte"),
    ("っで", "dde"),
    ("っと", "tto"),
    ("っど", "ddo"),
    ("っは", "hha"),
    ("っば", "bba"),
    ("っぱ", "ppa"),
    ("っひ", "hhi"),
    ("っひゃ", "hhya"),
    ("っひゅ", "hhyu"),
    ("っひょ", "hhyo"),
    ("っび", "bbi"),
    ("っびゃ", "bbya"),
    ("っびゅ", "bbyu"),
    ("っびょ", "bbyo"),
    ("っぴ", "ppi"),
    ("っぴゃ", "ppya"),
    ("っぴゅ", "ppyu"),
    ("っぴょ", "ppyo"),
    ("っふ", "ffu"),
    ("っふぁ", "ffa"),
    ("っふぃ", "ffi"),
    ("っふぇ", "ffe"),
    ("っふぉ", "ffo"),
    ("っぶ", "bbu"),
    ("っぷ", "ppu"),
    ("っへ", "hhe"),
    ("っべ", "bbe"),
    ("っぺ", "ppe"),
    ("っほ", "hho"),
    ("っぼ", "bbo"),
    ("っぽ", "ppo"),
    ("っや", "yya"),
    ("っゆ", "yyu"),
    ("っよ", "yyo"),
    ("っら", "rra"),
    ("っり", "rri"),
    ("っりゃ", "rrya"),
    ("っりゅ", "rryu"),
    ("っりょ", "rryo"),
    ("っる", "rru"),
    ("っれ", "rre"),
    ("っろ", "rro"),
    ("つ", "tsu"),
    ("づ", "du"),
    ("て", "te"),
    ("で", "de"),
    ("と", "to"),
    ("ど", "do"),
    ("な", "na"),
    ("に", "ni"),
    ("にゃ", "nya"),
    ("にゅ", "nyu"),
    ("にょ", "nyo"),
    ("ぬ", "nu"),
    ("ね", "ne"),
    ("の", "no"),
    ("は", "ha"),
    ("ば", "ba"),
    ("ぱ", "pa"),
    ("ひ", "hi"),
    ("ひゃ", "hya"),
    ("ひゅ", "hyu"),
    ("ひょ", "hyo"),
    ("び", "bi"),
    ("びゃ", "bya"),
    ("びゅ", "byu"),
    ("びょ", "byo"),
    ("ぴ", "pi"),
    ("ぴゃ", "pya"),
    ("ぴゅ", "pyu"),
    ("ぴょ", "pyo"),
    ("ふ", "fu"),
    ("ふぁ", "fa"),
    ("ふぃ", "fi"),
    ("ふぇ", "fe"),
    ("ふぉ", "fo"),
    ("ぶ", "bu"),
    ("ぷ", "pu"),
    ("へ", "he"),
    ("べ", "be"),
    ("ぺ", "pe"),
    ("ほ", "ho"),
    ("ぼ", "bo"),
    ("ぽ", "po"),
    ("ま", "ma"),
    ("み", "mi"),
    ("みゃ", "mya"),
    ("みゅ", "myu"),
    ("みょ", "myo"),
    ("む", "mu"),
    ("め", "me"),
    ("も", "mo"),
    ("ゃ", "ya"),
    ("や", "ya"),
    ("ゅ", "yu"),
    ("ゆ", "yu"),
    ("ょ", "yo"),
    ("よ", "yo"),
    ("ら", "ra"),
    ("り", "ri"),
    ("りゃ", "rya"),
    ("りゅ", "ryu"),
    ("りょ", "ryo"),
    ("る", "ru"),
    ("れ", "re"),
    ("ろ", "ro"),
    ("ゎ", "wa"),
    ("わ", "wa"),
    ("ゐ", "i"),
    ("ゑ", "e"),
    ("を", "wo"),
    ("ん", "n"),
    ("んあ", "n'a"),
    ("んい", "n'i"),
    ("んう", "n'u"),
    ("んえ", "n'e"),
    ("んお", "n'o"),
];

pub(super) const HIRAGANA_KUNREI: &[(&str, &str)] = &[
    ("ぁ", "a"),
    ("あ", "a"),
    ("ぃ", "i"),
    ("い", "i"),
    ("ぅ", "u"),
    ("う", "u"),
    ("う゛", "vu"),
    ("う゛ぁ", "va"),
    ("う゛ぃ", "vi"),
    ("う゛ぇ", "ve"),
    ("う゛ぉ", "vo"),
    ("ぇ", "e"),
    ("え", "e"),
    ("ぉ", "o"),
    ("お", "o"),
    ("か", "ka"),
    ("が", "ga"),
    ("き", "ki"),
    ("きゃ", "kya"),
    ("きゅ", "kyu"),
    ("きょ", "kyo"),
    ("ぎ", "gi"),
    ("ぎゃ", "gya"),
    ("ぎゅ", "gyu"),
    ("ぎょ", "gyo"),
    ("く", "ku"),
    ("ぐ", "gu"),
    ("け", "ke"),
    ("げ", "ge"),
    ("こ", "ko"),
    ("ご", "go"),
    ("さ", "sa"),
    ("ざ", "za"),
    ("し", "si"),
    ("しゃ", "sya"),
    ("しゅ", "syu"),
    ("しょ", "syo"),
    ("じ", "zi"),
    ("じゃ", "zya"),
    ("じゅ", "zyu"),
    ("じょ", "zyo"),
    ("す", "su"),
    ("ず", "zu"),
    ("せ", "se"),
    ("ぜ", "ze"),
    ("そ", "so"),
    ("ぞ", "zo"),
    ("た", "ta"),
    ("だ", "da"),
    ("ち", "ti"),
    ("ちゃ", "tya"),
    ("ちゅ", "tyu"),
    ("ちょ", "tyo"),
    ("ぢ", "di"),
    ("ぢゃ", "dya"),
    ("ぢゅ", "dyu"),
    ("ぢょ", "dyo"),
    ("っ", "tu"),
    ("っう゛", "vvu"),
    ("っう゛ぁ", "vva"),
    ("っう゛ぃ", "vvi"),
    ("っう゛ぇ", "vve"),
    ("っう゛ぉ", "vvo"),
    ("っか", "kka"),
    ("っが", "gga"),
    ("っき", "kki"),
    ("っきゃ", "kkya"),
    ("っきゅ", "kkyu"),
    ("っきょ", "kkyo"),
    ("っぎ", "ggi"),
    ("っぎゃ", "ggya"),
    ("っぎゅ", "ggyu"),
    ("っぎょ", "ggyo"),
    ("っく", "kku"),
    ("っぐ", "ggu"),
    ("っけ", "kke"),
    ("っげ", "gge"),
    ("っこ", "kko"),
    ("っご", "ggo"),
    ("っさ", "ssa"),
    ("っざ", "zza"),
    ("っし", "ssi"),
    ("っしゃ", "ssya"),
    ("っしゅ", "ssyu"),
    ("っしょ", "ssyo"),
    ("っじ", "zzi"),
    ("っじゃ", "zzya"),
    ("っじゅ", "zzyu"),
    ("っじょ", "zzyo"),
    ("っす", "ssu"),
    ("っず", "zzu"),
    ("っせ", "sse"),
    ("っぜ", "zze"),
    ("っそ", "sso"),
    ("っぞ", "zzo"),
    ("った", "tta"),
    ("っだ", "dda"),
    ("っち", "tti"),
    ("っちゃ", "ttya"),
    ("っちゅ", "ttyu"),
    ("っちょ", "ttyo"),
    ("っぢ", "ddi"),
    ("っぢゃ", "ddya"),
    ("っぢゅ", "ddyu"),
    ("っぢょ", "ddyo"),
    ("っつ", "ttu"),
    ("っづ", "ddu"),
    ("って", "tte"),
    ("っで", "dde"),
    ("っと", "tto"),
    ("っど", "ddo"),
    ("っは", "hha"),
    ("っば", "bba"),
    ("っぱ", "ppa"),
    ("っひ", "hhi"),
    ("っひゃ", "hhya"),
    ("っひゅ", "hhyu"),
    ("っひょ", "hhyo"),
    ("っび", "bbi"),
    ("っびゃ", "bbya"),
    ("っびゅ", "bbyu"),
    ("っびょ", "bbyo"),
    ("っぴ", "ppi"),
    ("っぴゃ", "ppya"),
    ("っぴゅ", "ppyu"),
    ("っぴょ", "ppyo"),
    ("っふ", "hhu"),
    ("っふぁ", "ffa"),
    ("っふぃ", "ffi"),
    ("っふぇ", "ffe"),
    ("っふぉ", "ffo"),
    ("っぶ", "bbu"),
    ("っぷ", "ppu"),
    ("っへ", "hhe"),
    ("っべ", "bbe"),
    ("っぺ", "ppe"),
    ("っほ", "hho"),
    ("っぼ", "bbo"),
    ("っぽ", "ppo"),
    ("っや", "yya"),
    ("っゆ", "yyu"),
    ("っよ", "yyo"),
    ("っら", "rra"),
    ("っり", "rri"),
    ("っりゃ", "rrya"),
    ("っりゅ", "rryu"),
    ("っりょ", "rryo"),
    ("っる", "rru"),
    ("っれ", "rre"),
    ("っろ", "rro"),
    ("つ", "tu"),
    ("づ", "du"),
    ("て", "te"),
    ("で", "de"),
    ("と", "to"),
    ("ど", "do"),
    ("な", "na"),
    ("に", "ni"),
    ("にゃ", "nya"),
    ("にゅ", "nyu"),
    ("にょ", "nyo"),
    ("ぬ", "nu"),
    ("ね", "ne"),
    ("の", "no"),
    ("は", "ha"),
    ("ば", "ba"),
    ("ぱ", "pa"),
    ("ひ", "hi"),
    ("ひゃ", "hya"),
    ("ひゅ", "hyu"),
    ("ひょ", "hyo"),
    ("び", "bi"),
    ("びゃ", "bya"),
    ("びゅ", "byu"),
    ("びょ", "byo"),
    ("ぴ", "pi"),
    ("ぴゃ", "pya"),
    ("ぴゅ", "pyu"),
    ("ぴょ", "pyo"),
    ("ふ", "hu"),
    ("ふぁ", "fa"),
    ("ふぃ", "fi"),
    ("ふぇ", "fe"),
    ("ふぉ", "fo"),
    ("ぶ", "bu"),
    ("ぷ", "pu"),
    ("へ", "he"),
    ("べ", "be"),
    ("ぺ", "pe"),
    ("ほ", "ho"),
    ("ぼ", "bo"),
    ("ぽ", "po"),
    ("ま", "ma"),
    ("み", "mi"),
    ("みゃ", "mya"),
    ("みゅ", "myu"),
    ("みょ", "myo"),
    ("む", "mu"),
    ("め", "me"),
    ("も", "mo"),
    ("ゃ", "ya"),
    ("や", "ya"),
    ("ゅ", "yu"),
    ("ゆ", "yu"),
    ("ょ", "yo"),
    ("よ", "yo"),
    ("ら", "ra"),
    ("り", "ri"),
    ("りゃ", "rya"),
    ("りゅ", "ryu"),
    ("りょ", "ryo"),
    ("る", "ru"),
    ("れ", "re"),
    ("ろ", "ro"),
    ("ゎ", "wa"),
    ("わ", "wa"),
    ("ゐ", "i"),
    ("ゑ", "e"),
    ("を", "wo"),
    ("ん", "n"),
    ("んあ", "n'a"),
    ("んい", "n'i"),
    ("んう", "n'u"),
    ("んえ", "n'e"),
    ("んお", "n'o"),
];

pub(super) const KATAKANA_HEPBURN: &[(&str, &str)] = &[
    ("ァ", "a"),
    ("ア", "a"),
    ("ィ", "i"),
    ("イ", "i"),
    ("ゥ", "u"),
    ("ウ", "u"),
    ("ェ", "e"),
    ("エ", "e"),
    ("ォ", "o"),
    ("オ", "o"),
    ("カ", "ka"),
    ("ガ", "ga"),
    ("キ", "ki"),
    ("キャ", "kya"),
    ("キュ", "kyu"),
    ("キョ", "kyo"),
    ("ギ", "gi"),
    ("ギャ", "gya"),
    ("ギュ", "gyu"),
    ("ギョ", "gyo"),
    ("ク", "ku"),
    ("グ", "gu"),
    ("ケ", "ke"),
    ("ゲ", "ge"),
    ("コ", "ko"),
    ("ゴ", "go"),
    ("サ", "sa"),
    ("ザ", "za"),
    ("シ", "shi"),
    ("シャ", "sha"),
    ("シュ", "shu"),
    ("ショ", "sho"),
    ("ジ", "ji"),
    ("ジャ", "ja"),
    ("ジュ", "ju"),
    ("ジョ", "jo"),
    ("ス", "su"),
    ("ズ", "zu"),
    ("セ", "se"),
    ("ゼ", "ze"),
    ("ソ", "so"),
    ("ゾ", "zo"),
    ("タ", "ta"),
    ("ダ", "da"),
    ("チ", "chi"),
    ("チャ", "cha"),
    ("チュ", "chu"),
    ("チョ", "cho"),
    ("ヂ", "di"),
    ("ヂャ", "dya"),
    ("ヂュ", "dyu"),
    ("ヂョ", "dyo"),
    ("ッ", "tsu"),
    ("ッカ", "kka"),
    ("ッガ", "gga"),
    ("ッキ", "kki"),
    ("ッキャ", "kkya"),
    ("ッキュ", "kkyu"),
    ("ッキョ", "kkyo"),
    ("ッギ", "ggi"),
    ("ッギャ", "ggya"),
    ("ッギュ", "ggyu"),
    ("ッギョ", "ggyo"),
    ("ック", "kku"),
    ("ッグ", "ggu"),
    ("ッケ", "kke"),
    ("ッゲ", "gge"),
    ("ッコ", "kko"),
    ("ッゴ", "ggo"),
    ("ッサ", "ssa"),
    ("ッザ", "zza"),
    ("ッシ", "sshi"),
    ("ッシャ", "ssha"),
    ("ッシュ", "sshu"),
    ("ッショ", "ssho"),
    ("ッジ", "jji"),
    ("ッジャ", "jja"),
    ("ッジュ", "jju"),
    ("ッジョ", "jjo"),
    ("ッス", "ssu"),
    ("ッズ", "zzu"),
    ("ッセ", "sse"),
    ("ッゼ", "zze"),
    ("ッソ", "sso"),
    ("ッゾ", "zzo"),
    ("ッタ", "tta"),
    ("ッダ", "dda"),
    ("ッチ", "cchi"),
    ("ッチャ", "ccha"),
    ("ッチュ", "cchu"),
    ("ッチョ", "ccho"),
    ("ッヂ", "ddi"),
    ("ッヂャ", "ddya"),
    ("ッヂュ", "ddyu"),
    ("ッヂョ", "ddyo"),
    ("ッツ", "ttsu"),
    ("ッヅ", "ddu"),
    ("ッテ", "tte"),
    ("ッデ", "dde"),
    ("ット", "tto"),
    ("ッド", "ddo"),
    ("ッハ", "hha"),
    ("ッバ", "bba"),
    ("ッパ", "ppa"),
    ("ッヒ", "hhi"),
    ("ッヒャ", "hhya"),
    ("ッヒュ", "hhyu"),
    ("ッヒョ", "hhyo"),
    ("ッビ", "bbi"),
    ("ッビャ", "bbya"),
    ("ッビュ", "bbyu"),
    ("ッビョ", "bbyo"),
    ("ッピ", "ppi"),
    ("ッピャ", "ppya"),
    ("ッピュ", "ppyu"),
    ("ッピョ", "ppyo"),
    ("ッフ", "ffu"),
    ("ッファ", "ffa"),
    ("ッフィ", "ffi"),
    ("ッフェ", "ffe"),
    ("ッフォ", "ffo"),
    ("ッブ", "bbu"),
    ("ップ", "ppu"),
    ("ッヘ", "hhe"),
    ("ッベ", "bbe"),
    ("ッペ", "ppe"),
    ("ッホ", "hho"),
    ("ッボ", "bbo"),
    ("ッポ", "ppo"),
    ("ッヤ", "yya"),
    ("ッユ", "yyu"),
    ("ッヨ", "yyo"),
    ("ッラ", "rra"),
    ("ッリ", "rri"),
    ("ッリャ", "rrya"),
    ("ッリュ", "rryu"),
    ("ッリョ", "rryo"),
    ("ッル", "rru"),
    ("ッレ", "rre"),
    ("ッロ", "rro"),
    ("ッヴ", "vvu"),
    ("ッヴァ", "vva"),
    ("ッヴィ", "vvi"),
    ("ッヴェ", "vve"),
    ("ッヴォ", "vvo"),
    ("ツ", "tsu"),
    ("ヅ", "du"),
    ("テ", "te"),
    ("デ", "de"),
    ("ト", "to"),
    ("ド", "do"),
    ("ナ", "na"),
    ("ニ", "ni"),
    ("ニャ", "nya"),
    ("ニュ", "nyu"),
    ("ニョ", "nyo"),
    ("ヌ", "nu"),
    ("ネ", "ne"),
    ("ノ", "no"),
    ("ハ", "ha"),
    ("バ", "ba"),
    ("パ", "pa"),
    ("ヒ", "hi"),
    ("ヒャ", "hya"),
    ("ヒュ", "hyu"),
    ("ヒョ", "hyo"),
    ("ビ", "bi"),
    ("ビャ", "bya"),
    ("ビュ", "byu"),
    ("ビョ", "byo"),
    ("ピ", "pi"),
    ("ピャ", "pya"),
    ("ピュ", "pyu"),
    ("ピョ", "pyo"),
    ("フ", "fu"),
    ("ファ", "fa"),
    ("フィ", "fi"),
    ("フェ", "fe"),
    ("フォ", "fo"),
    ("ブ", "bu"),
    ("プ", "pu"),
    ("ヘ", "he"),
    ("ベ", "be"),
    ("ペ", "pe"),
    ("ホ", "ho"),
    ("ボ", "bo"),
    ("ポ", "po"),
    ("マ", "ma"),
    ("ミ", "mi"),
    ("ミャ", "mya"),
    ("ミュ", "myu"),
    ("ミョ", "myo"),
    ("ム", "mu"),
    ("メ", "me"),
    ("モ", "mo"),
    ("ャ", "ya"),
    ("ヤ", "ya"),
    ("ュ", "yu"),
    ("ユ", "yu"),
    ("ョ", "yo"),
    ("ヨ", "yo"),
    ("ラ", "ra"),
    ("リ", "ri"),
    ("リャ", "rya"),
    ("リュ", "ryu"),
    ("リョ", "ryo"),
    ("ル", "ru"),
    ("レ", "re"),
    ("ロ", "ro"),
    ("ヮ", "wa"),
    ("ワ", "wa"),
    ("ヰ", "i"),
    ("ヱ", "e"),
    ("ヲ", "wo"),
    ("ン", "n"),
    ("ンア", "n'a"),
    ("ンイ", "n'i"),
    ("ンウ", "n'u"),
    ("ンエ", "n'e"),
    ("ンオ", "n'o"),
    ("ヴ", "vu"),
    ("ヴァ", "va"),
    ("ヴィ", "vi"),
    ("ヴェ", "ve"),
    ("ヴォ", "vo"),
    ("ヵ", "ka"),
    ("ヶ", "ke"),
    ("ー", "^"),
];

pub(super) const KATAKANA_KUNREI: &[(&str, &str)] = &[
    ("ァ", "a"),
    ("ア", "a"),
    ("ィ", "i"),
    ("イ", "i"),
    ("ゥ", "u"),
    ("ウ", "u"),
    ("ェ", "e"),
    ("エ", "e"),
    ("ォ", "o"),
    ("オ", "o"),
    ("カ", "ka"),
    ("ガ", "ga"),
    ("キ", "ki"),
    ("キャ", "kya"),
    ("キュ", "kyu"),
    ("キョ", "kyo"),
    ("ギ", "gi"),
    ("ギャ", "gya"),
    ("ギュ", "gyu"),
    ("ギョ", "gyo"),
    ("ク", "ku"),
    ("グ", "gu"),
    ("ケ", "ke"),
    ("ゲ", "ge"),
    ("コ", "ko"),
    ("ゴ", "go"),
    ("サ", "sa"),
    ("ザ", "za"),
    ("シ", "si"),
    ("シャ", "sya"),
    ("シュ", "syu"),
    ("ショ", "syo"),
    ("ジ", "zi"),
    ("ジャ", "zya"),
    ("ジュ", "zyu"),
    ("ジョ", "zyo"),
    ("ス", "su"),
    ("ズ", "zu"),
    ("セ", "se"),
    ("ゼ", "ze"),
    ("ソ", "so"),
    ("ゾ", "zo"),
    ("タ", "ta"),
    ("ダ", "da"),
    ("チ", "ti"),
    ("チャ", "tya"),
    ("チュ", "tyu"),
    ("チョ", "tyo"),
    ("ヂ", "di"),
    ("ヂャ", "dya"),
    ("ヂュ", "dyu"),
    ("ヂョ", "dyo"),
    ("ッ", "tu"),
    ("ッカ", "kka"),
    ("ッガ", "gga"),
    ("ッキ", "kki"),
    ("ッキャ", "kkya"),
    ("ッキュ", "kkyu"),
    ("ッキョ", "kkyo"),
    ("ッギ", "ggi"),
    ("ッギャ", "ggya"),
    ("ッギュ", "ggyu"),
    ("ッギョ", "ggyo"),
    ("ック", "kku"),
    ("ッグ", "ggu"),
    ("ッケ", "kke"),
    ("ッゲ", "gge"),
    ("ッコ", "kko"),
    ("ッゴ", "ggo"),
    ("ッサ", "ssa"),
    ("ッザ", "zza"),
    ("ッシ", "ssi"),
    ("ッシャ", "ssya"),
    ("ッシュ", "ssyu"),
    ("ッショ", "ssyo"),
    ("ッジ", "zzi"),
    ("ッジャ", "zzya"),
    ("ッジュ", "zzyu"),
    ("ッジョ", "zzyo"),
    ("ッス", "ssu"),
    ("ッズ", "zzu"),
    ("ッセ", "sse"),
    ("ッゼ", "zze"),
    ("ッソ", "sso"),
    ("ッゾ", "zzo"),
    ("ッタ", "tta"),
    ("ッダ", "dda"),
    ("ッチ", "tti"),
    ("ッチャ", "ttya"),
    ("ッチュ", "ttyu"),
    ("ッチョ", "ttyo"),
    ("ッヂ", "ddi"),
    ("ッヂャ", "ddya"),
    ("ッヂュ", "ddyu"),
    ("ッヂョ", "ddyo"),
    ("ッツ", "ttu"),
    ("ッヅ", "ddu"),
    ("ッテ", "tte"),
    ("ッデ", "dde"),
    ("ット", "tto"),
    ("ッド", "ddo"),
    ("ッハ", "hha"),
    ("ッバ", "bba"),
    ("ッパ", "ppa"),
    ("ッヒ", "hhi"),
    ("ッヒャ", "hhya"),
    ("ッヒュ", "hhyu"),
    ("ッヒョ", "hhyo"),
    ("ッビ", "bbi"),
    ("ッビャ", "bbya"),
    ("ッビュ", "bbyu"),
    ("ッビョ", "bbyo"),
    ("ッピ", "ppi"),
    ("ッピャ", "ppya"),
    ("ッピュ", "ppyu"),
    ("ッピョ", "ppyo"),
    ("ッフ", "hhu"),
    ("ッファ", "ffa"),
    ("ッフィ", "ffi"),
    ("ッフェ", "ffe"),
    ("ッフォ", "ffo"),
    ("ッブ", "bbu"),
    ("ップ", "ppu"),
    ("ッヘ", "hhe"),
    ("ッベ", "bbe"),
    ("ッペ", "ppe"),
    ("ッホ", "hho"),
    ("ッボ", "bbo"),
    ("ッポ", "ppo"),
    ("ッヤ", "yya"),
    ("ッユ", "yyu"),
    ("ッヨ", "yyo"),
    ("ッラ", "rra"),
    ("ッリ", "rri"),
    ("ッリャ", "rrya"),
    ("ッリュ", "rryu"),
    ("ッリョ", "rryo"),
    ("ッル", "rru"),
    ("ッレ", "rre"),
    ("ッロ", "rro"),
    ("ッヴ", "vvu"),
    ("ッヴァ", "vva"),
    ("ッヴィ", "vvi"),
    ("ッヴェ", "vve"),
    ("ッヴォ", "vvo"),
    ("ツ", "tu"),
    ("ヅ", "du"),
    ("テ", "te"),
    ("デ", "de"),
    ("ト", "to"),
    ("ド", "do"),
    ("ナ", "na"),
    ("ニ", "ni"),
    ("ニャ", "nya"),
    ("ニュ", "nyu"),
    ("ニョ", "nyo"),
    ("ヌ", "nu"),
    ("ネ", "ne"),
    ("ノ", "no"),
    ("ハ", "ha"),
    ("バ", "ba"),
    ("パ", "pa"),
    ("ヒ", "hi"),
    ("ヒャ", "hya"),
    ("ヒュ", "hyu"),
    ("ヒョ", "hyo"),
    ("ビ", "bi"),
    ("ビャ", "bya"),
    ("ビュ", "byu"),
    ("ビョ", "byo"),
    ("ピ", "pi"),
    ("ピャ", "pya"),
    ("ピュ", "pyu"),
    ("ピョ", "pyo"),
    ("フ", "hu"),
    ("ファ", "fa"),
    ("フィ", "fi"),
    ("フェ", "fe"),
    ("フォ", "fo"),
    ("ブ", "bu"),
    ("プ", "pu"),
    ("ヘ", "he"),
    ("ベ", "be"),
    ("ペ", "pe"),
    ("ホ", "ho"),
    ("ボ", "bo"),
    ("ポ", "po"),
    ("マ", "ma"),
    ("ミ", "mi"),
    ("ミャ", "mya"),
    ("ミュ", "myu"),
    ("ミョ", "myo"),
    ("ム", "mu"),
    ("メ", "me"),
    ("モ", "mo"),
    ("ャ", "ya"),
    ("ヤ", "ya"),
    ("ュ", "yu"),
    ("ユ", "yu"),
    ("ョ", "yo"),
    ("ヨ", "yo"),
    ("ラ", "ra"),
    ("リ", "ri"),
    ("リャ", "rya"),
    ("リュ", "ryu"),
    ("リョ", "ryo"),
    ("ル", "ru"),
    ("レ", "re"),
    ("ロ", "ro"),
    ("ヮ", "wa"),
    ("ワ", "wa"),
    ("ヰ", "i"),
    ("ヱ", "e"),
    ("ヲ", "wo"),
    ("ン", "n"),
    ("ンア", "n'a"),
    ("ンイ", "n'i"),
    ("ンウ", "n'u"),
    ("ンエ", "n'e"),
    ("ンオ", "n'o"),
    ("ヴ", "vu"),
    ("ヴァ", "va"),
    ("ヴィ", "vi"),
    ("ヴェ", "ve"),
    ("ヴォ", "vo"),
    ("ヵ", "ka"),
    ("ヶ", "ke"),
    ("ー", "^"),
];
