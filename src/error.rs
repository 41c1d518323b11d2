use std::path::PathBuf;
use thiserror::Error;

use crate::exitcode;

/// 生成・出力処理のエラー
#[derive(Error, Debug)]
pub enum TreeError {
    /// 深さが負、など入力値が不正
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// 出力ファイルの作成・書き込みに失敗
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 木の不変条件違反（内部バグ）
    #[error("invalid tree structure: {0}")]
    InvalidStructure(String),
}

pub type TreeResult<T> = Result<T, TreeError>;

impl TreeError {
    /// エラー種別に対応する終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            TreeError::InvalidArgument(_) => exitcode::USAGE,
            TreeError::Io { .. } => exitcode::CANTCREAT,
            TreeError::InvalidStructure(_) => exitcode::SOFTWARE,
        }
    }
}
