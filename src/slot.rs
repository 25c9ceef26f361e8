//! 空き時間スロットの選択モデル
//!
//! 医師・病院が曜日ごとの対応可能時間を登録するときの選択ダイアログの状態を、
//! 描画から切り離して保持する。
//!
//! ## モジュール構成
//!
//! - `label`: 30分刻みの時刻ラベル（48件の固定テーブル）
//! - `range`: `HH:MM-HH:MM` 形式の時間帯
//! - `preset`: クイック追加用の定型時間帯
//! - `selector`: 選択状態と add/remove/commit/cancel
//! - `host`: 確定結果を受け取るホスト側のコールバック
//! - `script`: テキストで記述した操作列の適用

mod host;
mod label;
mod preset;
mod range;
mod script;
mod selector;

pub use host::{RecordingHost, SavedSlots, SlotHost};
pub use label::{TimeLabel, DEFAULT_END, DEFAULT_START};
pub use preset::QuickPreset;
pub use range::{format_duration, TimeRange};
pub use script::{parse_actions, run_script};
pub use selector::TimeRangeSelector;
