use anyhow::{Result, anyhow};
use kovi::{
    MsgEvent, RuntimeBot,
    log::{error, info},
};

use crate::config::{Context, RATING_CEIL, RATING_FLOOR};
use crate::format::{format_problem, render};
use crate::selector::Selection;

const NOTHING_FOUND: &str = "这个难度范围内没有找到题目，请稍后再试";

/// 选题并渲染成消息正文。
/// 没选到和拉取失败对外都是"没有"，日志里区分开
async fn select_and_render(ctx: &Context, min_rating: i64, max_rating: i64) -> Option<String> {
    let selection = {
        let mut selector = ctx.selector.lock().await;
        selector.pick(min_rating, max_rating).await
    };

    match selection {
        Selection::Found(problem) => {
            let formatted = format_problem(Some(&problem))?;
            Some(render(&formatted))
        }
        Selection::NotFound => {
            info!("{} 到 {} 范围内暂时没有可选的题目", min_rating, max_rating);
            None
        }
        Selection::Failed(e) => {
            error!("拉取题库失败: {}", e);
            None
        }
    }
}

fn parse_range(args: &[String], from: usize) -> Result<(i64, i64)> {
    let min_rating = args
        .get(from)
        .ok_or_else(|| anyhow!("missing min rating"))?
        .parse::<i64>()?;
    let max_rating = args
        .get(from + 1)
        .ok_or_else(|| anyhow!("missing max rating"))?
        .parse::<i64>()?;
    Ok((min_rating, max_rating))
}

/// /problem 最小难度 最大难度
pub async fn problem(event: &MsgEvent, args: &[String], ctx: &Context) {
    let (min_rating, max_rating) = match parse_range(args, 1) {
        Ok(range) => range,
        Err(_) => {
            event.reply("用法：/problem 最小难度 最大难度");
            return;
        }
    };

    match select_and_render(ctx, min_rating, max_rating).await {
        Some(msg) => event.reply(msg),
        None => event.reply(NOTHING_FOUND),
    }
}

/// /daily test，按当前配置立刻发一次，方便验证
pub async fn daily_test(event: &MsgEvent, ctx: &Context) {
    let (min_rating, max_rating) = {
        let config = ctx.config.read().await;
        (config.min_rating, config.max_rating)
    };

    match select_and_render(ctx, min_rating, max_rating).await {
        Some(msg) => event.reply(format!("今日份每日一题：\n{}", msg)),
        None => event.reply(NOTHING_FOUND),
    }
}

pub async fn show_range(event: &MsgEvent, ctx: &Context) {
    let config = ctx.config.read().await;
    event.reply(format!(
        "当前难度范围：{} - {}",
        config.min_rating, config.max_rating
    ));
}

pub async fn set_range(event: &MsgEvent, args: &[String], ctx: &Context) {
    let (min_rating, max_rating) = match parse_range(args, 2) {
        Ok(range) => range,
        Err(_) => {
            event.reply("用法：/range set 最小难度 最大难度");
            return;
        }
    };

    if min_rating >= max_rating {
        event.reply("最小难度必须小于最大难度");
        return;
    }

    if min_rating < RATING_FLOOR || max_rating > RATING_CEIL {
        event.reply(format!(
            "注意：Codeforces 的常见难度范围是 {} 到 {}",
            RATING_FLOOR, RATING_CEIL
        ));
    }

    {
        let mut config = ctx.config.write().await;
        config.min_rating = min_rating;
        config.max_rating = max_rating;
    }

    event.reply(format!("难度范围已更新为 {} - {}", min_rating, max_rating));
}

pub async fn show_channel(event: &MsgEvent, ctx: &Context) {
    match ctx.config.read().await.notify_group {
        Some(group) => event.reply(format!("当前推送群：{}", group)),
        None => event.reply("还没有配置推送群，使用 /channel set 设置一个"),
    }
}

/// /channel set [群号]，不带群号则使用当前群
pub async fn set_channel(event: &MsgEvent, args: &[String], ctx: &Context) {
    let group = match args.get(2) {
        Some(arg) => match arg.parse::<i64>() {
            Ok(group) => Some(group),
            Err(_) => {
                event.reply("用法：/channel set [群号]");
                return;
            }
        },
        None => event.group_id,
    };

    let Some(group) = group else {
        event.reply("请在群聊中使用，或显式指定群号");
        return;
    };

    ctx.config.write().await.notify_group = Some(group);
    event.reply(format!("每日一题将发送到群 {}", group));
}

pub async fn show_config(event: &MsgEvent, ctx: &Context) {
    let config = *ctx.config.read().await;
    let group = config
        .notify_group
        .map(|g| g.to_string())
        .unwrap_or_else(|| "未配置".to_string());
    let (hour, minute) = ctx.daily_at;

    event.reply(format!(
        "当前配置：\n难度范围：{} - {}\n推送群：{}\n推送时间：每天 {:02}:{:02}",
        config.min_rating, config.max_rating, group, hour, minute
    ));
}

/// 每日定时任务。配置在触发那一刻读取，
/// 没配置推送群就记一条日志退出，不影响以后的触发
pub async fn daily_job(bot: &RuntimeBot, ctx: &Context) {
    let config = *ctx.config.read().await;

    let Some(group) = config.notify_group else {
        info!("还没有配置推送群，跳过今天的每日一题");
        return;
    };

    match select_and_render(ctx, config.min_rating, config.max_rating).await {
        Some(msg) => bot.send_group_msg(group, format!("今日份每日一题：\n{}", msg)),
        None => bot.send_group_msg(group, "今天没有找到合适的题目，明天再看看吧"),
    }
}
