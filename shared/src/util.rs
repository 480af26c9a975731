/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a cart-local line id (UUID v4, hyphenated).
///
/// Independent of the catalog id so the same dish can sit in the cart twice.
pub fn new_line_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
