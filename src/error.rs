use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvifyError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("キーワードが不正: {0}")]
    InvalidKeyword(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("フォルダ走査エラー: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("ZIPエラー: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("アーカイブエラー: {0}")]
    Archive(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),
}

pub type Result<T> = std::result::Result<T, CvifyError>;
