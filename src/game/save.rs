//! Neon Clicker セーブ/ロード機能。
//!
//! ## フォーマット方針
//!
//! 保存形式は localStorage の単一キーに入るフラットな JSON:
//! `{"score", "perClickYield", "autoYield", "boosts": {id: {"purchased"}}}`。
//! 毎回フルステートで上書きするので、どのタイミングで保存が重なっても
//! 途中状態が混ざることはない。
//!
//! 読み込みは常に寛容に行う:
//! - キーが無い / JSON が壊れている → 警告ログを出して新規データで開始
//! - フィールド不足 → デフォルト値で補完 (`serde(default)`)
//! - 未知のブースト id → 無視、カタログに無いものは復元しない
//! 壊れたセーブが初期化を止めることはない。

#[cfg(any(target_arch = "wasm32", test))]
use std::collections::BTreeMap;

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

#[cfg(any(target_arch = "wasm32", test))]
use super::state::{GameState, CATALOG};

/// localStorage のキー。
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "neon_clicker_save";

/// シリアライズ用のセーブデータ構造体。
/// GameState の一時的なUI状態（パーティクル、トースト等）は含まない。
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SaveData {
    score: u64,
    per_click_yield: u64,
    auto_yield: u64,
    /// ブースト id → 購入フラグ。カタログ定義そのものは保存しない。
    boosts: BTreeMap<String, BoostSave>,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct BoostSave {
    purchased: bool,
}

#[cfg(any(target_arch = "wasm32", test))]
impl Default for SaveData {
    fn default() -> Self {
        Self {
            score: 0,
            per_click_yield: 1,
            auto_yield: 0,
            boosts: BTreeMap::new(),
        }
    }
}

/// GameState からセーブ用データを抽出する。
#[cfg(any(target_arch = "wasm32", test))]
fn extract_save(state: &GameState) -> SaveData {
    SaveData {
        score: state.score,
        per_click_yield: state.per_click_yield,
        auto_yield: state.auto_yield,
        boosts: CATALOG
            .iter()
            .zip(&state.purchased)
            .map(|(spec, purchased)| {
                (
                    spec.id.to_string(),
                    BoostSave {
                        purchased: *purchased,
                    },
                )
            })
            .collect(),
    }
}

/// セーブデータを GameState に復元する。
/// カタログに存在しない id は無視し、足りない id は未購入として扱う。
#[cfg(any(target_arch = "wasm32", test))]
fn apply_save(state: &mut GameState, save: &SaveData) {
    state.score = save.score;
    // 0 が紛れ込んだ古いデータでもクリックが無効にならないよう下限 1
    state.per_click_yield = save.per_click_yield.max(1);
    state.auto_yield = save.auto_yield;
    for (i, spec) in CATALOG.iter().enumerate() {
        state.purchased[i] = save
            .boosts
            .get(spec.id)
            .map(|b| b.purchased)
            .unwrap_or(false);
    }
}

/// JSON 文字列をセーブデータとしてパースする。壊れていれば None。
#[cfg(any(target_arch = "wasm32", test))]
fn parse_save(json: &str) -> Option<SaveData> {
    serde_json::from_str(json).ok()
}

/// localStorage にアクセスする。WASM 環境でのみ動作。
#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// ゲーム状態を localStorage に保存する。
/// 失敗時（容量超過など）はサイレントに無視（コンソールにログ出力）。
#[cfg(target_arch = "wasm32")]
pub fn save_game(state: &GameState) {
    let save_data = extract_save(state);
    let json = match serde_json::to_string(&save_data) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Neon Clicker: セーブのシリアライズに失敗: {e}").into(),
            );
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(
                &format!("Neon Clicker: localStorage への保存に失敗: {e:?}").into(),
            );
        }
    }
}

/// localStorage からゲーム状態を復元する。
/// キーが無い・パースエラーの場合は false を返す（新規ゲームになる）。
#[cfg(target_arch = "wasm32")]
pub fn load_game(state: &mut GameState) -> bool {
    let storage = match get_storage() {
        Some(s) => s,
        None => return false,
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return false,
    };

    let save_data = match parse_save(&json) {
        Some(d) => d,
        None => {
            web_sys::console::warn_1(
                &"Neon Clicker: セーブデータのパースに失敗（破棄します）".into(),
            );
            // 壊れたデータを削除
            let _ = storage.remove_item(STORAGE_KEY);
            return false;
        }
    };

    apply_save(state, &save_data);
    true
}

/// セーブデータを削除する。
#[cfg(target_arch = "wasm32")]
#[allow(dead_code)]
pub fn delete_save() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
