use crate::codeforces::Problem;
use crate::difficulty;

/// 接口没给题目名时的占位名
const UNNAMED: &str = "未知题目";

/// 投递用的展示视图，所有字段都已补全
pub struct FormattedProblem {
    pub contest_id: i64,
    pub index: String,
    pub name: String,
    pub rating: String,
    pub difficulty_units: usize,
    pub tags: Vec<String>,
    pub url: String,
}

/// 没有题目时保持没有；有题目时缺失字段给缺省值，不报错
pub fn format_problem(problem: Option<&Problem>) -> Option<FormattedProblem> {
    let problem = problem?;

    let name = if problem.name.is_empty() {
        UNNAMED.to_string()
    } else {
        problem.name.clone()
    };

    Some(FormattedProblem {
        contest_id: problem.contest_id,
        index: problem.index.clone(),
        name,
        rating: problem
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        difficulty_units: difficulty::quantize(problem.rating),
        tags: problem.tags.clone(),
        url: problem.url(),
    })
}

/// 渲染成群消息正文
pub fn render(problem: &FormattedProblem) -> String {
    let difficulty = if problem.difficulty_units > 0 {
        format!(
            "{} {}",
            difficulty::bars(problem.difficulty_units),
            problem.rating
        )
    } else {
        problem.rating.clone()
    };

    let tags = if problem.tags.is_empty() {
        "暂无标签".to_string()
    } else {
        problem.tags.join(", ")
    };

    format!(
        "题目：{}（{}{}）\n难度：{}\n标签：{}\n链接：{}",
        problem.name, problem.contest_id, problem.index, difficulty, tags, problem.url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_propagates_to_none() {
        assert!(format_problem(None).is_none());
    }

    #[test]
    fn defaults_missing_fields() {
        let problem = Problem {
            contest_id: 2,
            index: "B".to_string(),
            name: String::new(),
            rating: None,
            tags: vec![],
        };

        let formatted = format_problem(Some(&problem)).unwrap();
        assert_eq!(formatted.name, "未知题目");
        assert_eq!(formatted.rating, "N/A");
        assert_eq!(formatted.difficulty_units, 0);
        assert!(formatted.tags.is_empty());
    }

    #[test]
    fn renders_all_fields() {
        let problem = Problem {
            contest_id: 1,
            index: "A".to_string(),
            name: "Theatre Square".to_string(),
            rating: Some(1000),
            tags: vec!["math".to_string()],
        };

        let formatted = format_problem(Some(&problem)).unwrap();
        assert_eq!(formatted.url, "https://codeforces.com/problemset/problem/1/A");
        assert_eq!(formatted.difficulty_units, 2);

        let msg = render(&formatted);
        assert!(msg.contains("Theatre Square"));
        assert!(msg.contains("▰▰ 1000"));
        assert!(msg.contains("math"));
        assert!(msg.contains("https://codeforces.com/problemset/problem/1/A"));
    }

    #[test]
    fn unrated_renders_without_bars() {
        let problem = Problem {
            contest_id: 3,
            index: "C".to_string(),
            name: "Mystery".to_string(),
            rating: None,
            tags: vec![],
        };

        let msg = render(&format_problem(Some(&problem)).unwrap());
        assert!(msg.contains("N/A"));
        assert!(!msg.contains("▰"));
        assert!(msg.contains("暂无标签"));
    }
}
