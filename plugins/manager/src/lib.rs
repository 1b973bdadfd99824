use config::Config;
use kovi::MsgEvent;
use kovi::bot::runtimebot::kovi_api::SetAccessControlList;
use kovi::serde_json::Value;
use kovi::utils::load_json_data;
use kovi::PluginBuilder as plugin;

mod config;

const PLUGINS: &[&str] = &["daily_problem", "manager"];

#[kovi::plugin]
async fn main() {
    let bot = plugin::get_runtime_bot();
    let data_path = bot.get_data_path();
    let config_path = data_path.join("config.json");
    let config = load_json_data(Config::empty(), config_path).unwrap();

    // 按白名单收紧各插件的可用范围
    let whitelist = &config.whitelist;

    for plugin_name in PLUGINS {
        bot.set_plugin_access_control(plugin_name, true).unwrap();
        bot.set_plugin_access_control_list(
            plugin_name,
            true,
            SetAccessControlList::Changes(whitelist.clone()),
        )
        .unwrap();
    }

    plugin::on_msg(move |event| async move {
        let text = event.borrow_text().unwrap_or_default();
        if text.starts_with("/help") {
            handle_help(&event).await;
        }
    });
}

async fn handle_help(event: &MsgEvent) {
    let text = event.borrow_text().unwrap_or_default();
    let text = text[5..].trim();

    let help = &*config::HELP;

    if text.is_empty() {
        let list = help
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        event.reply(format!(
            "可用的模块如下：\n{}\n输入 /help [模块名称] 查询详细用法",
            list
        ));
        return;
    }

    let msg = match help.get(text) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        _ => {
            event.reply("未找到该模块");
            return;
        }
    };

    event.reply(msg);
}
