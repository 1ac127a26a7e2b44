//! User-visible copy for the form.

pub const TITLE: &str = "AI Memo Summarizer";
pub const SUBTITLE: &str = "テキストを貼り付けて、瞬時に要約を生成します。";
pub const PLACEHOLDER: &str = "ここに要約したい文章を貼り付けてください...";

pub const EMPTY_INPUT: &str = "要約するテキストを入力してください。";
pub const STATUS_ERROR_PREFIX: &str = "エラーが発生しました: ";
pub const UNKNOWN_FAILURE: &str = "要約の取得中に不明なエラーが発生しました。";

pub const SUMMARIZE_LABEL: &str = "Summarize";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const CLEAR_LABEL: &str = "Clear";

pub const ERROR_HEADING: &str = "Error";
pub const SUMMARY_HEADING: &str = "Summary";
