use std::sync::LazyLock;

use kovi::serde_json::{self, Value};
use kovi::tokio::sync::{Mutex, RwLock};

use crate::selector::Selector;

pub(crate) const RATING_FLOOR: i64 = 800;
pub(crate) const RATING_CEIL: i64 = 3500;

/// 启动时从 config.json 读入的配置
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub(crate) struct FileConfig {
    pub min_rating: i64,
    pub max_rating: i64,
    pub notify_group: Option<i64>,
    pub daily_hour: u32,
    pub daily_minute: u32,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            min_rating: 800,
            max_rating: 1300,
            notify_group: None,
            daily_hour: 8,
            daily_minute: 0,
        }
    }
}

/// 运行期可变的部分，由 /range 和 /channel 指令修改
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuntimeConfig {
    pub min_rating: i64,
    pub max_rating: i64,
    pub notify_group: Option<i64>,
}

/// 插件内共享的状态，启动时装配一次，
/// 指令处理和定时任务都拿同一份
pub(crate) struct Context {
    pub config: RwLock<RuntimeConfig>,
    pub selector: Mutex<Selector>,
    pub daily_at: (u32, u32),
}

impl Context {
    pub fn new(file: &FileConfig) -> Self {
        Self {
            config: RwLock::new(RuntimeConfig {
                min_rating: file.min_rating,
                max_rating: file.max_rating,
                notify_group: file.notify_group,
            }),
            selector: Mutex::new(Selector::new()),
            daily_at: (file.daily_hour, file.daily_minute),
        }
    }
}

pub(crate) static COMMAND: LazyLock<Value> = LazyLock::new(|| {
    serde_json::json!({
        "problem": "problem",
        "daily": {
            "test": "daily_test"
        },
        "range": {
            "show": "show_range",
            "set": "set_range"
        },
        "channel": {
            "show": "show_channel",
            "set": "set_channel"
        },
        "config": "show_config"
    })
});
