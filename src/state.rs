/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - 現状は空。署名検証を足すときに検証鍵などをここに持たせる
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
