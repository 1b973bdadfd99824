use std::sync::Arc;

use kovi::log::info;
use kovi::serde_json::Value;
use kovi::utils::load_json_data;
use kovi::{MsgEvent, PluginBuilder as plugin, tokio};

use crate::config::{Context, FileConfig};
use crate::utils::{mes_to_text, resolve_command};

pub(crate) mod codeforces;
pub(crate) mod config;
pub(crate) mod difficulty;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod handlers;
pub(crate) mod history;
pub(crate) mod selector;
pub(crate) mod utils;

#[kovi::plugin]
async fn main() {
    let bot = plugin::get_runtime_bot();
    let data_path = bot.get_data_path();

    let config_path = data_path.join("config.json");
    let file_config: FileConfig = load_json_data(Default::default(), config_path).unwrap();

    let ctx = Arc::new(Context::new(&file_config));

    let cron = format!(
        "{} {} * * *",
        file_config.daily_minute, file_config.daily_hour
    );
    {
        let bot = Arc::clone(&bot);
        let ctx = Arc::clone(&ctx);
        plugin::cron(&cron, move || {
            let bot = Arc::clone(&bot);
            let ctx = Arc::clone(&ctx);
            async move {
                handlers::daily_job(&bot, &ctx).await;
            }
        })
        .unwrap();
    }

    info!(
        "每日一题已装填，将在每天 {:02}:{:02} 发射",
        file_config.daily_hour, file_config.daily_minute
    );

    plugin::on_msg(move |event| {
        let ctx = Arc::clone(&ctx);
        async move {
            handle(event, &ctx, &config::COMMAND).await;
        }
    });
}

async fn handle(event: Arc<MsgEvent>, ctx: &Context, command: &Value) {
    let text = mes_to_text(&event.message);

    let text = text.trim();
    let Some(text) = text.strip_prefix('/') else {
        return;
    };

    let mut args = text
        .split_whitespace()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let (cmd, corrected) = match resolve_command(&mut args, command) {
        Ok(resolved) => resolved,
        Err(_e) => {
            return;
        }
    };

    if corrected {
        let new_text = format!("指令被解析为 /{}", args.join(" "));
        event.reply(new_text);
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    match cmd.as_str() {
        "problem" => {
            handlers::problem(&event, &args, ctx).await;
        }
        "daily_test" => {
            handlers::daily_test(&event, ctx).await;
        }
        "show_range" => {
            handlers::show_range(&event, ctx).await;
        }
        "set_range" => {
            handlers::set_range(&event, &args, ctx).await;
        }
        "show_channel" => {
            handlers::show_channel(&event, ctx).await;
        }
        "set_channel" => {
            handlers::set_channel(&event, &args, ctx).await;
        }
        "show_config" => {
            handlers::show_config(&event, ctx).await;
        }
        _ => {}
    }
}
