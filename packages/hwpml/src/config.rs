//! Fixed strings and dimensions of generated HWPML documents.

/// Root element attributes.
pub const HWPML_VERSION: &str = "2.91";
pub const HWPML_SUB_VERSION: &str = "10.0.0.0";
pub const HWPML_STYLE: &str = "export";

/// Author recorded in the document summary and the authorship line.
pub const DEFAULT_AUTHOR: &str = "CHA 규정 혁신 어시스턴트";

/// Date format of the document summary (`2025년 03월 01일`).
pub const SUMMARY_DATE_FORMAT: &str = "%Y년 %m월 %d일";

/// Date format of the body date lines (`2025. 03. 01.`).
pub const BODY_DATE_FORMAT: &str = "%Y. %m. %d.";

/// Font used for every script and both font slots.
pub const FONT_NAME: &str = "맑은 고딕";

/// Script categories that receive a font face list.
pub const FONT_LANGS: [&str; 4] = ["Hangul", "Latin", "Hanja", "Symbol"];

/// Fonts declared per face list.
pub const FONTS_PER_LANG: usize = 2;

/// Total table width in HWP units (about 160mm on A4).
pub const TABLE_TOTAL_WIDTH: u32 = 16000;

/// Glyph replacing markdown bullet markers.
pub const BULLET_PREFIX: &str = "  · ";

// Amendment document
pub const METADATA_HEADING: &str = "■ 개정 기획안 요약";
pub const METADATA_HEADERS: [&str; 2] = ["항목", "내용"];
pub const METADATA_WIDTHS: [u32; 2] = [3000, 13000];
pub const COMPARISON_HEADING: &str = "■ 신구대조문";
pub const COMPARISON_HEADERS: [&str; 2] = ["현    행", "개  정  안"];
pub const COMPARISON_WIDTHS: [u32; 2] = [8000, 8000];
pub const ADDENDA_HEADING: &str = "■ 부칙";
pub const EFFECTIVE_DATE_CLAUSE: &str = "제1조 (시행일) 이 규정은 공포한 날부터 시행한다.";
pub const TRANSITIONAL_CLAUSE: &str =
    "제2조 (경과조치) 이 규정 시행 당시 종전의 규정에 따라 재학 중인 학생에 대하여는 종전의 규정을 적용한다.";
pub const AMENDMENT_DISCLAIMER: &str =
    "※ 이 문서는 AI가 자동 생성한 초안입니다. 반드시 법무 검토 후 사용하시기 바랍니다.";

// Analysis document
pub const ANALYSIS_HEADING: &str = "■ AI 분석 결과";
pub const RELATED_HEADING: &str = "■ 관련 규정 목록";
pub const RELATED_HEADERS: [&str; 3] = ["규정명", "조문 수", "관련도"];
pub const RELATED_WIDTHS: [u32; 3] = [9000, 3000, 4000];
pub const ANALYSIS_DISCLAIMER: &str =
    "※ 이 문서는 AI가 자동 생성한 분석 결과입니다. 참고 자료로만 활용하시기 바랍니다.";

// Q&A document
pub const QA_TITLE_SUFFIX: &str = "Q&A 기록";
pub const QA_DISCLAIMER: &str = "※ AI 생성 답변입니다. 공식 해석은 해당 부서에 확인하시기 바랍니다.";

// Table-text reverse parsing
/// Cell values that mark the header row of a comparison table (before column).
pub const BEFORE_HEADER_LABELS: [&str; 3] = ["현행", "현 행", "現行"];
/// Cell values that mark the header row of a comparison table (after column).
pub const AFTER_HEADER_LABELS: [&str; 3] = ["개정안", "개정 안", "改正案"];
/// Keyword of a line that opens the "before" section in prose drafts.
pub const BEFORE_MARKER: &str = "현행";
/// Keyword of a line that opens the "after" section in prose drafts.
pub const AFTER_MARKER: &str = "개정";
/// Punctuation that must accompany a section keyword.
pub const MARKER_PUNCTUATION: [char; 2] = [':', '】'];
/// Before-text of the row substituted when a draft cannot be parsed.
pub const PLACEHOLDER_BEFORE: &str = "(AI 생성 텍스트)";
