use std::sync::LazyLock;

use kovi::serde_json::{Value, json};
use serde::Deserialize;

#[derive(Debug, Deserialize, serde::Serialize)]
pub struct Config {
    pub whitelist: Vec<i64>,
}

impl Config {
    pub fn empty() -> Self {
        Self { whitelist: vec![] }
    }
}

pub static HELP: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "problem": "/problem 最小难度 最大难度：在给定难度范围内随机一道最近没出过的题",
        "daily": [
            "/daily test：按当前配置立刻发送一次每日一题，用于验证配置"
        ],
        "range": [
            "/range show：查看每日一题的难度范围",
            "/range set 最小难度 最大难度：设置难度范围，常见范围是 800 到 3500"
        ],
        "channel": [
            "/channel show：查看每日一题的推送群",
            "/channel set [群号]：设置推送群，不带群号则使用当前群"
        ],
        "config": "/config：查看难度范围、推送群和推送时间"
    })
});
