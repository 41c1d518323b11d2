//! 終了コード (BSD sysexits.h 互換)

/// コマンドライン引数の誤り
pub const USAGE: i32 = 64;

/// 内部エラー
pub const SOFTWARE: i32 = 70;

/// 出力ファイルを作成できない
pub const CANTCREAT: i32 = 73;
