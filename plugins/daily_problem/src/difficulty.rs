const BASE_RATING: i64 = 800;
const BAND_WIDTH: i64 = 200;
const MAX_UNITS: i64 = 15;

/// 把 rating 映射成难度条数量，每 200 分一档，最多 15 档。
/// 没有 rating 的题目不显示难度条。
pub fn quantize(rating: Option<i64>) -> usize {
    let Some(rating) = rating else {
        return 0;
    };

    ((rating - BASE_RATING).div_euclid(BAND_WIDTH) + 1).clamp(1, MAX_UNITS) as usize
}

pub fn bars(units: usize) -> String {
    "▰".repeat(units)
}
