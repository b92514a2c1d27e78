//! ルールベース抽出で使う語彙

/// 現場名とみなす語尾
pub const SITE_SUFFIXES: &[&str] = &[
    "ビル", "現場", "建物", "マンション", "アパート", "店舗", "事務所", "工場",
];

/// よくある姓（敬称なしでも担当者とみなす）
pub const SURNAMES: &[&str] = &[
    "山田", "田中", "佐藤", "鈴木", "高橋", "渡辺", "伊藤", "中村", "小林", "加藤", "吉田",
];

/// 敬称
pub const HONORIFICS: &[&str] = &["さん", "君", "氏"];

/// 名前に使える文字（漢字・カタカナ・英数字。助詞を巻き込まないよう平仮名は除く）
pub const NAME_CHARS: &str = r"[\p{Han}\p{Katakana}ー々A-Za-z0-9Ａ-Ｚａ-ｚ０-９]";

/// 「〇〇は…」で問題点を明示する名詞（長いものから順に試す）
pub const ISSUE_NOUNS: &[&str] = &[
    "問題点", "問題", "トラブル", "不具合", "懸念事項", "懸念", "課題",
];

/// 問題点の文に含まれる語
pub const ISSUE_KEYWORDS: &[&str] = &[
    "問題", "トラブル", "エラー", "不具合", "故障", "漏れ", "異音", "異常",
    "心配", "懸念", "気になる", "うまくいかない", "困った", "失敗", "課題",
];

/// 「〇〇は…」で明日の予定を明示する語（長いものから順に試す）
pub const PLAN_TRIGGERS: &[&str] = &[
    "明日の業務は", "明日の予定は", "明日の作業は", "明日に関しては", "明日は", "翌日は", "次回は",
];

/// 明日以降の予定の文に含まれる語
pub const TOMORROW_KEYWORDS: &[&str] = &[
    "明日", "次回", "来週", "後日", "今度", "次の", "翌日",
];

/// 「今日」を含まなければ予定とみなす語
pub const PLAN_KEYWORDS: &[&str] = &["予定", "計画"];

/// 今日の話であることを示す語
pub const TODAY_MARKER: &str = "今日";

/// 明日の予定の区切り（問題点の節はここで打ち切る）
pub const TOMORROW_MARKER: &str = "明日";

/// 作業の継続を示す語
pub const CONTINUATION_MARKERS: &[&str] = &["続き", "継続"];

/// 本日の業務の文に含まれる語
pub const WORK_KEYWORDS: &[&str] = &[
    "設置", "取付", "撤去", "点検", "清掃", "修理", "試運転", "配管", "接続", "配線",
    "調整", "確認", "完了", "実施", "作業", "エアコン", "室外機", "室内機",
];
