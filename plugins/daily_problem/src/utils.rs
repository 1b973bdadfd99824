use anyhow::{Error, Result};
use kovi::Message;
use kovi::serde_json::Value;

/// 把消息段拼成纯文本，只关心文字段
pub fn mes_to_text(msg: &Message) -> String {
    msg.iter()
        .filter_map(|seg| match seg.type_.as_str() {
            "text" => Some(seg.data["text"].as_str().unwrap_or_default().to_string()),
            _ => None,
        })
        .collect::<String>()
}

/// 在指令表里逐级匹配参数，容忍少量拼写错误。
/// 命中字符串叶子即为指令名，同时报告是否发生过纠正。
pub fn resolve_command(args: &mut [String], table: &Value) -> Result<(String, bool)> {
    let mut node = table;
    let mut corrected = false;

    for arg in args.iter_mut() {
        let map = match node {
            Value::String(cmd) => return Ok((cmd.clone(), corrected)),
            Value::Object(map) => map,
            _ => return Err(Error::msg("invalid command table")),
        };

        let best = map
            .keys()
            .map(|k| (k.clone(), strsim::normalized_damerau_levenshtein(k, arg)))
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let Some((key, score)) = best else {
            return Err(Error::msg("invalid command table"));
        };

        if score <= 0.6 {
            return Err(Error::msg("unknown command"));
        }

        if key != *arg {
            corrected = true;
            *arg = key.clone();
        }

        node = map
            .get(&key)
            .ok_or_else(|| Error::msg("invalid command table"))?;
    }

    match node {
        Value::String(cmd) => Ok((cmd.clone(), corrected)),
        _ => Err(Error::msg("unknown command")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kovi::serde_json::json;

    fn table() -> Value {
        json!({
            "problem": "problem",
            "range": {
                "show": "show_range",
                "set": "set_range"
            },
            "config": "show_config"
        })
    }

    fn resolve(input: &[&str]) -> Result<(String, bool)> {
        let mut args = input.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        resolve_command(&mut args, &table())
    }

    #[test]
    fn resolves_exact_commands() {
        assert_eq!(resolve(&["problem"]).unwrap(), ("problem".to_string(), false));
        assert_eq!(
            resolve(&["range", "set", "800", "1300"]).unwrap(),
            ("set_range".to_string(), false)
        );
        assert_eq!(
            resolve(&["config"]).unwrap(),
            ("show_config".to_string(), false)
        );
    }

    #[test]
    fn corrects_near_misses() {
        let mut args = vec!["confg".to_string()];
        let (cmd, corrected) = resolve_command(&mut args, &table()).unwrap();
        assert_eq!(cmd, "show_config");
        assert!(corrected);
        // 参数被改写成纠正后的词，方便回显
        assert_eq!(args[0], "config");
    }

    #[test]
    fn rejects_unknown_words() {
        assert!(resolve(&["xyzzy"]).is_err());
    }

    #[test]
    fn incomplete_path_is_not_a_command() {
        assert!(resolve(&["range"]).is_err());
        assert!(resolve(&[]).is_err());
    }

    #[test]
    fn every_leaf_in_plugin_table_resolves() {
        for (input, expect) in [
            (vec!["problem", "800", "1300"], "problem"),
            (vec!["daily", "test"], "daily_test"),
            (vec!["range", "show"], "show_range"),
            (vec!["range", "set", "800", "1300"], "set_range"),
            (vec!["channel", "show"], "show_channel"),
            (vec!["channel", "set"], "set_channel"),
            (vec!["config"], "show_config"),
        ] {
            let mut args = input.iter().map(|s| s.to_string()).collect::<Vec<_>>();
            let (cmd, corrected) =
                resolve_command(&mut args, &crate::config::COMMAND).unwrap();
            assert_eq!(cmd, expect);
            assert!(!corrected);
        }
    }
}
